//! The card itself.
//!
//! Names come from the route query (`/?from=Ana&to=Bruno`). The page swaps
//! between the public letter, the secret puzzle and the secret letter.

use dioxus::prelude::*;
use serenade_core::{Personalization, HOME_PARAGRAPHS};

use crate::app::Route;
use crate::components::{
    AudioPlayer, AudioUnlock, FloatingHearts, LetterGeneratorCard, LetterParagraph, PersonalizationForm,
    RelationshipTimer, SecretContent, SecretPuzzle, ShareSection,
};
use crate::context::card_config;

/// Names on the card: the route query, or the command line when it is empty.
fn names_for(query: &str) -> Personalization {
    if query.trim().is_empty() {
        card_config().names.clone()
    } else {
        Personalization::from_query(query)
    }
}

#[component]
pub fn Home(query: String) -> Element {
    let navigator = use_navigator();
    let names = names_for(&query);
    let mut secret_mode = use_signal(|| false);
    let mut unlocked = use_signal(|| false);
    let mut audio_ready = use_signal(|| !card_config().audio_prompt);

    let on_personalize = move |names: Personalization| {
        tracing::info!(from = %names.from, to = %names.to, "Personalized card");
        navigator.replace(Route::Home {
            query: names.to_query(),
        });
    };

    let headline = if unlocked() {
        "\u{1F48E} Secrets of the Heart".to_string()
    } else {
        names.headline()
    };
    let subtitle = if names.is_personalized() {
        "A musical letter from the heart of someone in love"
    } else {
        "A musical letter from the heart"
    };

    let main_content = if secret_mode() && !unlocked() {
        rsx! {
            SecretPuzzle {
                on_solved: move |_| {
                    tracing::info!("Secret letter unlocked");
                    unlocked.set(true);
                },
            }
        }
    } else if secret_mode() {
        rsx! { SecretContent { names: names.clone() } }
    } else {
        let last = HOME_PARAGRAPHS.len() - 1;
        let sender = names.from.clone();
        rsx! {
            for (index, paragraph) in HOME_PARAGRAPHS.iter().enumerate() {
                div { key: "{index}", class: "love-card",
                    LetterParagraph { text: paragraph.to_string() }
                    if index == last {
                        div { class: "love-signoff",
                            span { class: "love-badge", "\u{1F496} With all my love, from your nerd!" }
                            if !sender.is_empty() {
                                div { class: "signature",
                                    p { class: "signature-lead", "With love," }
                                    p { class: "signature-name", "{sender}" }
                                }
                            }
                        }
                    } else {
                        div { class: if index % 2 == 0 { "love-ornament right" } else { "love-ornament" },
                            "\u{2665}"
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page",
            FloatingHearts {}
            if !audio_ready() {
                AudioUnlock { on_unlock: move |_| audio_ready.set(true) }
            }

            header { class: "page-header",
                div { class: "brand", "\u{2665} Love Letter" }
                div { class: "header-actions",
                    if !secret_mode() {
                        button {
                            class: "btn-ghost secret-toggle",
                            onclick: move |_| secret_mode.set(true),
                            "\u{1F512} Secret Mode"
                        }
                    }
                    PersonalizationForm { names: names.clone(), on_personalize }
                    AudioPlayer {}
                }
            }

            section { class: "hero",
                h1 { class: "hero-title", "{headline}" }
                if secret_mode() {
                    button {
                        class: "btn-ghost",
                        onclick: move |_| {
                            secret_mode.set(false);
                            unlocked.set(false);
                        },
                        "\u{2190} Back to the letter"
                    }
                }
                RelationshipTimer {}
                p { class: "hero-subtitle", "{subtitle}" }
            }

            main { class: "letter", {main_content} }

            if !secret_mode() {
                LetterGeneratorCard { names: names.clone(), secret: false }
                ShareSection { names: names.clone() }
            }

            footer { class: "page-footer",
                p { "\u{266B} Inspired by the songs that touch the heart" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_names_win_over_config() {
        let names = names_for("from=Ana&to=Bruno");
        assert_eq!(names.from, "Ana");
        assert_eq!(names.to, "Bruno");
    }

    #[test]
    fn test_empty_query_uses_config() {
        assert_eq!(names_for("  "), card_config().names);
    }
}
