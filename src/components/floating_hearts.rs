//! Decorative hearts drifting up the background.

use dioxus::prelude::*;
use rand::Rng;

use crate::theme::colors::HEART_COLORS;

const HEART_COUNT: usize = 14;

/// Inline style for one heart
fn heart_style(left: f64, size: f64, delay: f64, duration: f64, color: &str) -> String {
    format!(
        "left: {:.1}%; font-size: {:.0}px; color: {}; animation-delay: {:.1}s; animation-duration: {:.1}s;",
        left, size, color, delay, duration
    )
}

/// Background layer; positions are drawn once per mount.
#[component]
pub fn FloatingHearts() -> Element {
    let hearts = use_hook(|| {
        let mut rng = rand::rng();
        (0..HEART_COUNT)
            .map(|i| {
                heart_style(
                    rng.random_range(0.0..100.0),
                    rng.random_range(14.0..34.0),
                    rng.random_range(0.0..12.0),
                    rng.random_range(10.0..20.0),
                    HEART_COLORS[i % HEART_COLORS.len()],
                )
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "floating-hearts", "aria-hidden": "true",
            for (i, style) in hearts.into_iter().enumerate() {
                span {
                    key: "{i}",
                    class: "floating-heart",
                    style: "{style}",
                    "\u{2665}"
                }
            }
        }
    }
}
