//! Compact player shown in the card header.

use dioxus::prelude::*;
use serenade_core::{format_time, PlayerPhase};

use crate::context::use_player;

/// Play/pause, seek bar, loop toggle and status for the current song.
#[component]
pub fn AudioPlayer() -> Element {
    let mut player = use_player();

    let (title, state, phase, looping) = {
        let player = player.read();
        (
            player.current_track().map(|track| track.title.clone()),
            player.state().clone(),
            player.phase(),
            player.is_looping(),
        )
    };

    let Some(title) = title else {
        return rsx! {
            div { class: "player idle",
                span { class: "player-icon", "\u{266A}" }
                span { class: "player-hint", "Click a song title" }
            }
        };
    };

    let toggle_symbol = if state.is_loading {
        "\u{2026}"
    } else if state.is_playing {
        "\u{23F8}"
    } else {
        "\u{25B6}"
    };
    let progress = state.progress_percent();
    let position = format_time(state.current_time);
    let length = format_time(state.duration);
    let current_time = state.current_time;
    let duration = state.duration;
    let loop_class = if looping { "player-loop active" } else { "player-loop" };

    rsx! {
        div { class: "player",
            button {
                class: "player-toggle",
                disabled: state.is_loading,
                "aria-label": if state.is_playing { "Pause" } else { "Play" },
                onclick: move |_| player.write().toggle_play(),
                "{toggle_symbol}"
            }
            div { class: "player-body",
                div { class: "player-title", "{title}" }
                div { class: "player-timeline",
                    span { "{position}" }
                    input {
                        class: "player-seek",
                        r#type: "range",
                        min: "0",
                        max: "{duration}",
                        step: "0.1",
                        value: "{current_time}",
                        disabled: duration <= 0.0,
                        style: "--progress: {progress}%",
                        oninput: move |evt: FormEvent| {
                            if let Ok(time) = evt.value().parse::<f64>() {
                                player.write().seek(time);
                            }
                        },
                    }
                    span { "{length}" }
                }
                if let Some(error) = state.error.as_ref() {
                    div {
                        class: if phase == PlayerPhase::Error { "player-error" } else { "player-notice" },
                        "{error}"
                    }
                }
            }
            button {
                class: "{loop_class}",
                title: "Repeat",
                onclick: move |_| {
                    let looping = player.read().is_looping();
                    player.write().set_loop(!looping);
                },
                "\u{21BB}"
            }
        }
    }
}
