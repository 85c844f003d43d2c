//! Share links for the card and for generated letters.

use std::fmt;

use crate::letters::Letter;
use crate::personalization::Personalization;

/// Where a card link can be shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareTarget {
    WhatsApp,
    Instagram,
    Facebook,
    CopyLink,
    Email,
}

impl ShareTarget {
    /// Targets offered by the share section, in display order
    pub const CARD: [ShareTarget; 4] = [
        ShareTarget::WhatsApp,
        ShareTarget::Instagram,
        ShareTarget::Facebook,
        ShareTarget::CopyLink,
    ];
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareTarget::WhatsApp => write!(f, "WhatsApp"),
            ShareTarget::Instagram => write!(f, "Instagram"),
            ShareTarget::Facebook => write!(f, "Facebook"),
            ShareTarget::CopyLink => write!(f, "Copy Link"),
            ShareTarget::Email => write!(f, "Email"),
        }
    }
}

/// What the shell should do to share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Open this url in the system browser or mail client
    Open(String),
    /// Put this text on the clipboard
    Copy(String),
}

/// The card's public url plus the announcement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    url: String,
    text: String,
}

impl ShareLink {
    pub fn new(base_url: &str, names: &Personalization) -> Self {
        let query = names.to_query();
        let url = if query.is_empty() {
            base_url.to_string()
        } else {
            format!("{}?{}", base_url, query)
        };
        let text = if !names.from.is_empty() && names.has_recipient() {
            format!(
                "{} prepared a special love letter for {}! 💕",
                names.from, names.to
            )
        } else {
            "Check out this special love letter! 💕".to_string()
        };
        Self { url, text }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn share_text(&self) -> &str {
        &self.text
    }

    /// Url (or clipboard text) for a target.
    pub fn target_url(&self, target: ShareTarget) -> String {
        match self.action(target) {
            ShareAction::Open(url) | ShareAction::Copy(url) => url,
        }
    }

    pub fn action(&self, target: ShareTarget) -> ShareAction {
        match target {
            ShareTarget::WhatsApp => ShareAction::Open(whatsapp_url(&format!(
                "{} {}",
                self.text, self.url
            ))),
            ShareTarget::Facebook => ShareAction::Open(format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                urlencoding::encode(&self.url)
            )),
            ShareTarget::Email => ShareAction::Open(mailto_url(
                "A special love letter 💕",
                &format!("{}\n\n{}", self.text, self.url),
            )),
            // Instagram has no share endpoint; the link goes to the clipboard
            ShareTarget::Instagram | ShareTarget::CopyLink => ShareAction::Copy(self.url.clone()),
        }
    }
}

/// WhatsApp link carrying a generated letter.
pub fn letter_whatsapp_url(letter: &Letter, names: &Personalization) -> String {
    whatsapp_url(&format!(
        "🎵 *Musical Love Letter* 🎵\n\n{}\n\n🎶 Inspired by: {}\n\n💕 A special letter for {}",
        letter.body,
        letter.song.title,
        names.to
    ))
}

/// `mailto:` link carrying a generated letter.
pub fn letter_email_url(letter: &Letter, names: &Personalization) -> String {
    let to = if names.has_recipient() {
        names.to.as_str()
    } else {
        "You"
    };
    mailto_url(
        &format!("💕 A Musical Love Letter for {}", to),
        &format!(
            "🎵 Musical Love Letter 🎵\n\n{}\n\n🎶 Inspired by: {}\n\n💕 A special letter made with love!",
            letter.body, letter.song.title
        ),
    )
}

fn whatsapp_url(text: &str) -> String {
    format!("https://wa.me/?text={}", urlencoding::encode(text))
}

fn mailto_url(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Track;

    const BASE: &str = "https://card.example/";

    #[test]
    fn test_plain_link() {
        let link = ShareLink::new(BASE, &Personalization::default());
        assert_eq!(link.url(), BASE);
        assert_eq!(link.share_text(), "Check out this special love letter! 💕");
    }

    #[test]
    fn test_personalized_link() {
        let link = ShareLink::new(BASE, &Personalization::new("Ana", "Bruno"));
        assert_eq!(link.url(), "https://card.example/?from=Ana&to=Bruno");
        assert!(link.share_text().starts_with("Ana prepared"));
    }

    #[test]
    fn test_targets() {
        let link = ShareLink::new(BASE, &Personalization::new("Ana", "you"));
        assert_eq!(link.url(), "https://card.example/?from=Ana");

        let whatsapp = link.target_url(ShareTarget::WhatsApp);
        assert!(whatsapp.starts_with("https://wa.me/?text="));
        assert!(whatsapp.contains("https%3A%2F%2Fcard.example"));

        assert_eq!(
            link.target_url(ShareTarget::Facebook),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fcard.example%2F%3Ffrom%3DAna"
        );
        assert_eq!(
            link.action(ShareTarget::Instagram),
            ShareAction::Copy(link.url().to_string())
        );
        assert_eq!(link.target_url(ShareTarget::CopyLink), link.url());
        assert!(link.target_url(ShareTarget::Email).starts_with("mailto:?subject="));
    }

    #[test]
    fn test_letter_links() {
        let letter = Letter {
            song: Track::new("Red", "https://x/red.mp3"),
            body: "hello & bye".into(),
            secret: false,
        };
        let names = Personalization::default();
        let email = letter_email_url(&letter, &names);
        assert!(email.contains("for%20You"));
        assert!(email.contains("hello%20%26%20bye"));
        assert!(letter_whatsapp_url(&letter, &names).contains("Inspired%20by%3A%20Red"));
    }
}
