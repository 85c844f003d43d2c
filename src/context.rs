//! Shared card state provided through context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut now_playing = use_now_playing();
//! play_title(&mut now_playing, "Enchanted", true);
//!
//! let player = use_player();
//! let playing = player.read().state().is_playing;
//! ```

use dioxus::prelude::*;
use serenade_core::{AudioController, ElapsedTime, NowPlaying};

use crate::audio_bridge::WebviewAudio;
use crate::CardConfig;

/// The player as kept in context.
pub type Player = AudioController<WebviewAudio>;

/// Card configuration from the command line.
pub fn card_config() -> &'static CardConfig {
    crate::config()
}

/// Hook to access the webview audio handle.
pub fn use_audio() -> WebviewAudio {
    use_context::<WebviewAudio>()
}

/// Hook to access the audio player controller.
pub fn use_player() -> Signal<Player> {
    use_context::<Signal<Player>>()
}

/// Hook to access the current song selection.
///
/// Writing a new selection here is how anything in the card plays a song;
/// the app loads it into the player.
pub fn use_now_playing() -> Signal<NowPlaying> {
    use_context::<Signal<NowPlaying>>()
}

/// Hook to access the live time-together counter.
pub fn use_elapsed() -> Signal<ElapsedTime> {
    use_context::<Signal<ElapsedTime>>()
}

/// Select the song called `title`.
///
/// Titles without a configured url leave the selection untouched.
pub fn play_title(now_playing: &mut Signal<NowPlaying>, title: &str, looping: bool) -> bool {
    let songs = &card_config().songs;
    if !songs.has_url(title) {
        tracing::debug!(title, "Song has no url, nothing to play");
        return false;
    }
    now_playing.write().select_title(songs, title, looping)
}
