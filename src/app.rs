use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use serenade_core::{AudioController, MediaEvent, NowPlaying};

use crate::audio_bridge::WebviewAudio;
use crate::context::{card_config, Player};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/?from=..&to=..` - The letter, personalized by the query
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/?:..query")]
    Home { query: String },
}

/// Root application component.
///
/// Provides global styles, the player, the song selection and the clock.
#[component]
pub fn App() -> Element {
    let (audio, bridge) = use_hook(|| {
        let (audio, bridge) = WebviewAudio::start();
        (audio, Rc::new(Cell::new(Some(bridge))))
    });
    let player_audio = audio.clone();
    let mut player: Signal<Player> = use_signal(move || {
        let mut player = AudioController::new(player_audio);
        player.set_on_ended(|track| tracing::info!(title = %track.title, "Song finished"));
        player
    });
    let now_playing = use_signal(NowPlaying::new);
    let mut elapsed = use_signal(|| card_config().clock.elapsed());

    use_context_provider(|| audio);
    use_context_provider(|| player);
    use_context_provider(|| now_playing);
    use_context_provider(|| elapsed);

    // Pump commands into the webview and media events into the controller
    use_hook(move || {
        if let Some(bridge) = bridge.take() {
            spawn(bridge.run(move |event| {
                player.write().handle_event(MediaEvent::from(event));
            }));
        }
    });

    // Load whatever gets selected
    use_effect(move || {
        let Some(track) = now_playing.read().current().cloned() else {
            player.write().clear();
            return;
        };
        let mut player = player.write();
        let looping = track.loop_playback;
        match player.load_track(track) {
            Ok(_) => player.set_loop(looping),
            Err(e) => tracing::warn!("Cannot play selection: {}", e),
        }
    });

    // Tick the time-together counter
    use_hook(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                elapsed.set(card_config().clock.elapsed());
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
