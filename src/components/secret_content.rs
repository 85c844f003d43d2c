//! The secret letter, shown once the puzzle is solved.

use dioxus::prelude::*;
use serenade_core::Personalization;

use crate::components::LetterGeneratorCard;
use crate::context::{play_title, use_now_playing};

/// Song that plays on a loop while the secret letter is open
const SECRET_SONG: &str = "Enchanted";

#[component]
pub fn SecretContent(names: Personalization) -> Element {
    let mut now_playing = use_now_playing();

    use_hook(move || {
        if !play_title(&mut now_playing, SECRET_SONG, true) {
            tracing::warn!(title = SECRET_SONG, "Secret song has no url");
        }
    });

    let recipient = names.recipient().to_string();
    let sender = names.from.clone();
    let signed = !sender.is_empty();

    rsx! {
        div { class: "secret-content",
            div { class: "secret-heading",
                h2 { class: "secret-title", "For my princess" }
                p { class: "secret-subtitle", "Confessions of an enchanted soul" }
            }

            div { class: "love-card",
                p { class: "love-text",
                    "My dear {recipient}, today I decided to reveal the secrets of my heart. "
                    "Every beat echoes your name, every sigh carries your essence."
                }
            }

            div { class: "love-card",
                p { class: "love-text",
                    "You are my "
                    span { class: "secret-song", "Secret Love Song" }
                    ", that rare melody that rings quietly in every corner of my soul. "
                    "When I see you it feels like hearing a song that was never played before, "
                    "as if the universe had written something just for the two of us."
                }
            }

            div { class: "love-card",
                p { class: "love-text",
                    "In the quietest moments, when the world is asleep and only my thoughts remain, "
                    "your smile is what lights up my mind. You are my refuge, the safe place where "
                    "I can be completely vulnerable and still feel invincible."
                }
            }

            div { class: "love-card",
                p { class: "love-text",
                    "You have eleven fictional husbands and still find time for me, which is "
                    "practically an interdimensional miracle. I'm happy to be last in line, "
                    "because I'll be the one next to you when the credits roll. "
                    "No special effects, just real love."
                }
            }

            div { class: "love-card",
                p { class: "love-text",
                    "You declared "
                    span { class: "secret-song", "{SECRET_SONG}" }
                    " to me, and now I declare it back to you. It fit our moment so perfectly "
                    "that it became my favourite, just like you became the melody I want to hear forever."
                }
                div { class: "love-signoff",
                    span { class: "love-badge",
                        "\u{1F496} With all the love in the world, from an enchanted nerd \u{1F451}"
                    }
                    if signed {
                        div { class: "signature",
                            p { class: "signature-lead", "Forever yours," }
                            p { class: "signature-name", "{sender}" }
                        }
                    }
                }
            }

            LetterGeneratorCard { names, secret: true }
        }
    }
}
