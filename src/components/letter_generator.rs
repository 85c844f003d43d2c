//! Song-inspired letter generator.

use std::time::Duration;

use dioxus::prelude::*;
use serenade_core::letters::{letter_email_url, letter_whatsapp_url};
use serenade_core::{Letter, LetterGenerator, Personalization};

use crate::components::share_section::open_external;
use crate::context::{card_config, use_elapsed, use_now_playing};

/// Pause before a letter appears
const WRITING_DELAY: Duration = Duration::from_millis(1500);

/// Card that writes a random letter around one of the songs.
///
/// In secret mode the letter is written as soon as the card mounts and
/// there is no "write another" button.
#[component]
pub fn LetterGeneratorCard(names: Personalization, secret: bool) -> Element {
    let mut now_playing = use_now_playing();
    let elapsed = use_elapsed();
    let mut letter = use_signal(|| None::<Letter>);
    let mut writing = use_signal(|| false);

    let write_names = names.clone();
    let write = use_callback(move |_: ()| {
        if writing() {
            return;
        }
        writing.set(true);
        let names = write_names.clone();
        spawn(async move {
            tokio::time::sleep(WRITING_DELAY).await;
            let generator = LetterGenerator::new(&card_config().songs);
            let written = {
                let mut rng = rand::rng();
                if secret {
                    generator.generate_secret(&mut rng, &names, elapsed())
                } else {
                    generator.generate(&mut rng, &names, elapsed())
                }
            };
            match written {
                Some(written) => {
                    now_playing.write().select(written.song.clone());
                    letter.set(Some(written));
                }
                None => tracing::warn!("No playable songs to write a letter around"),
            }
            writing.set(false);
        });
    });

    use_hook(move || {
        if secret {
            write.call(());
        }
    });

    let heading = if secret {
        "Your Special Secret Letter"
    } else {
        "More love letters I wrote for you"
    };

    rsx! {
        section { class: if secret { "love-card generator secret" } else { "love-card generator" },
            h2 { class: "generator-title", "{heading}" }
            if secret {
                p { class: "generator-subtitle", "An intimate letter just for the two of us" }
            }

            if writing() {
                p { class: "generator-status", "\u{2665} Writing your letter..." }
            } else if let Some(current) = letter() {
                LetterView { letter: current, names: names.clone() }
            }

            if !secret {
                button {
                    class: "btn-primary",
                    disabled: writing(),
                    onclick: move |_| write.call(()),
                    if letter().is_some() { "Write another letter" } else { "Write me a letter" }
                }
            }
        }
    }
}

#[component]
fn LetterView(letter: Letter, names: Personalization) -> Element {
    let mut now_playing = use_now_playing();
    let whatsapp = letter_whatsapp_url(&letter, &names);
    let email = letter_email_url(&letter, &names);
    let body = letter.body.clone();
    let song = letter.song;
    let song_title = song.title.clone();

    rsx! {
        article { class: "generated-letter",
            p { class: "letter-body", "{body}" }
            button {
                class: "song-chip",
                onclick: move |_| {
                    now_playing.write().select(song.clone());
                },
                "\u{266B} Inspired by {song_title}"
            }
            div { class: "letter-share",
                button {
                    class: "share-btn",
                    onclick: move |_| open_external(&whatsapp),
                    "Send on WhatsApp"
                }
                button {
                    class: "share-btn",
                    onclick: move |_| open_external(&email),
                    "Send by email"
                }
            }
        }
    }
}
