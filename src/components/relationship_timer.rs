//! Live "time together" counter.

use dioxus::prelude::*;

use crate::context::{card_config, use_elapsed};

#[component]
pub fn RelationshipTimer() -> Element {
    let elapsed = use_elapsed()();
    let since = card_config().clock.start().format("%B %-d, %Y").to_string();

    let units = [
        (elapsed.days, "days"),
        (elapsed.hours, "hours"),
        (elapsed.minutes, "minutes"),
        (elapsed.seconds, "seconds"),
    ];

    rsx! {
        div { class: "timer",
            p { class: "timer-caption", "Together for" }
            div { class: "timer-units",
                for (value, label) in units {
                    div { key: "{label}", class: "timer-unit",
                        span { class: "timer-value", "{value}" }
                        span { class: "timer-label", "{label}" }
                    }
                }
            }
            p { class: "timer-since", "since {since}" }
        }
    }
}
