//! One-time "enable music" prompt.

use std::time::Duration;

use dioxus::prelude::*;

use crate::context::use_audio;

/// Pause after the silent clip before the prompt closes
const ACTIVATION_DELAY: Duration = Duration::from_millis(500);

/// Overlay that unlocks webview audio with a user gesture, so clicking a
/// song title can start playback straight away.
#[component]
pub fn AudioUnlock(on_unlock: EventHandler<()>) -> Element {
    let audio = use_audio();
    let mut activating = use_signal(|| false);

    let activate = move |_| {
        if activating() {
            return;
        }
        activating.set(true);
        audio.unlock();
        tracing::info!("Audio unlocked by the listener");
        spawn(async move {
            tokio::time::sleep(ACTIVATION_DELAY).await;
            activating.set(false);
            on_unlock.call(());
        });
    };

    rsx! {
        div { class: "unlock-overlay",
            div { class: "unlock-card",
                div { class: "unlock-icon", "\u{266B}" }
                h3 { class: "unlock-title", "Enable Music" }
                p { class: "unlock-text",
                    "To play the songs when you click their titles, audio needs to be enabled first."
                }
                button {
                    class: "btn-primary",
                    disabled: activating(),
                    onclick: activate,
                    if activating() { "Enabling..." } else { "\u{1F50A} Enable Music" }
                }
                p { class: "hint-text", "You only need to do this once" }
            }
        }
    }
}
