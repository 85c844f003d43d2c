//! Share buttons for the card link.

use std::time::Duration;

use dioxus::prelude::*;
use serenade_core::{Personalization, ShareAction, ShareLink, ShareTarget};

use crate::context::card_config;

/// How long a "copied" notice stays visible
const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Open `url` outside the card (browser, mail client or share page).
pub fn open_external(url: &str) {
    match serde_json::to_string(url) {
        Ok(quoted) => {
            tracing::info!(%url, "Opening share link");
            dioxus::document::eval(&format!("window.open({}, '_blank');", quoted));
        }
        Err(e) => tracing::warn!("Cannot open {}: {}", url, e),
    }
}

/// Carry out a share action, reporting clipboard results through `notice`.
pub fn perform_share(action: ShareAction, mut notice: Signal<Option<String>>) {
    match action {
        ShareAction::Open(url) => open_external(&url),
        ShareAction::Copy(text) => {
            spawn(async move {
                // Use arboard for cross-platform clipboard access
                let message = match arboard::Clipboard::new()
                    .and_then(|mut clipboard| clipboard.set_text(text))
                {
                    Ok(()) => "Link copied to your clipboard",
                    Err(e) => {
                        tracing::warn!("Clipboard not available: {}", e);
                        "Could not reach the clipboard"
                    }
                };
                notice.set(Some(message.to_string()));
                tokio::time::sleep(NOTICE_DURATION).await;
                notice.set(None);
            });
        }
    }
}

#[component]
pub fn ShareSection(names: Personalization) -> Element {
    let notice = use_signal(|| None::<String>);
    let link = ShareLink::new(&card_config().share_url, &names);
    let buttons: Vec<(ShareTarget, ShareAction)> = ShareTarget::CARD
        .iter()
        .map(|target| (*target, link.action(*target)))
        .collect();

    rsx! {
        section { class: "share-section",
            h3 { class: "section-header", "Share this love" }
            div { class: "share-buttons",
                for (target, action) in buttons {
                    button {
                        key: "{target}",
                        class: "share-btn",
                        onclick: move |_| perform_share(action.clone(), notice),
                        "{target}"
                    }
                }
            }
            if let Some(message) = notice() {
                p { class: "share-notice", "{message}" }
            }
        }
    }
}
