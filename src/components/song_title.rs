//! Letter prose with clickable song titles.

use dioxus::prelude::*;
use serenade_core::{parse_segments, Segment};

use crate::context::{card_config, play_title, use_now_playing};

/// A song title inside the letter. Clicking it plays the song.
///
/// Titles with no configured audio render as plain emphasis.
#[component]
pub fn SongTitle(title: String) -> Element {
    let mut now_playing = use_now_playing();
    let playable = card_config().songs.has_url(&title);
    let selected = now_playing
        .read()
        .current()
        .is_some_and(|track| track.title == title);

    let class = match (playable, selected) {
        (false, _) => "song-title unavailable",
        (true, true) => "song-title selected",
        (true, false) => "song-title",
    };
    let label = title.clone();

    rsx! {
        span {
            class: "{class}",
            title: if playable { "Play {label}" } else { "No audio for this song yet" },
            onclick: move |_| {
                play_title(&mut now_playing, &title, false);
            },
            "{label}"
        }
    }
}

/// One paragraph of prose using `<song>` markup.
#[component]
pub fn LetterParagraph(text: String) -> Element {
    let segments = parse_segments(&text);

    rsx! {
        p { class: "love-text",
            for (index, segment) in segments.into_iter().enumerate() {
                {
                    match segment {
                        Segment::Text(text) => rsx! { span { key: "{index}", "{text}" } },
                        Segment::Song(title) => rsx! { SongTitle { key: "{index}", title } },
                    }
                }
            }
        }
    }
}
