//! Sender and recipient names carried in the card's query string.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Recipient used when no `to` name is given
pub const DEFAULT_RECIPIENT: &str = "you";
/// How the letters address a recipient with no name
pub const ANONYMOUS_RECIPIENT: &str = "my love";
/// Signature used when no `from` name is given
pub const ANONYMOUS_SENDER: &str = "Your secret admirer";

/// The card's query parameters as they appear in the url.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CardQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<String>,
}

/// Who the card is from and who it is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personalization {
    pub from: String,
    pub to: String,
}

impl Default for Personalization {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

impl Personalization {
    /// Build from raw names; a blank `to` falls back to the placeholder.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into().trim().to_string();
        let to = to.into().trim().to_string();
        Self {
            from,
            to: if to.is_empty() {
                DEFAULT_RECIPIENT.to_string()
            } else {
                to
            },
        }
    }

    /// Parse `from`/`to` out of a query string (leading `?` optional).
    ///
    /// Other parameters are ignored. A query that cannot be parsed gives the
    /// default names.
    pub fn from_query(query: &str) -> Self {
        let query: CardQuery = match serde_urlencoded::from_str(query.trim_start_matches('?')) {
            Ok(query) => query,
            Err(e) => {
                warn!("Ignoring unreadable card query {:?}: {}", query, e);
                CardQuery::default()
            }
        };
        Self::new(query.from.unwrap_or_default(), query.to.unwrap_or_default())
    }

    /// Query string (without `?`) that reproduces these names.
    ///
    /// Empty `from` and the placeholder `to` are left out.
    pub fn to_query(&self) -> String {
        let query = CardQuery {
            from: (!self.from.is_empty()).then(|| self.from.clone()),
            to: self.has_recipient().then(|| self.to.clone()),
        };
        serde_urlencoded::to_string(&query).unwrap_or_else(|e| {
            warn!("Failed to encode card query: {}", e);
            String::new()
        })
    }

    /// Whether a real recipient name was given
    pub fn has_recipient(&self) -> bool {
        !self.to.is_empty() && self.to != DEFAULT_RECIPIENT
    }

    /// Both names given
    pub fn is_personalized(&self) -> bool {
        !self.from.is_empty() && self.has_recipient()
    }

    /// Recipient as the letters address them
    pub fn recipient(&self) -> &str {
        if self.has_recipient() {
            &self.to
        } else {
            ANONYMOUS_RECIPIENT
        }
    }

    /// Sender as the letters sign
    pub fn sender(&self) -> &str {
        if self.from.is_empty() {
            ANONYMOUS_SENDER
        } else {
            &self.from
        }
    }

    /// Page headline
    pub fn headline(&self) -> String {
        if self.is_personalized() {
            format!("A Love Letter from {} to {}", self.from, self.to)
        } else {
            "A Love Letter".to_string()
        }
    }

    /// Substitute `{toName}` and `{fromName}` in a template.
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{toName}", self.recipient())
            .replace("{fromName}", self.sender())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_recipient() {
        let p = Personalization::default();
        assert_eq!(p.to, "you");
        assert_eq!(p.recipient(), "my love");
        assert_eq!(p.sender(), "Your secret admirer");
        assert_eq!(p.headline(), "A Love Letter");
        assert_eq!(p.to_query(), "");
    }

    #[test]
    fn test_from_query() {
        let p = Personalization::from_query("?from=Jo%C3%A3o&to=Malu+Silva&utm=x");
        assert_eq!(p.from, "João");
        assert_eq!(p.to, "Malu Silva");
        assert_eq!(p.headline(), "A Love Letter from João to Malu Silva");
    }

    #[test]
    fn test_missing_to_defaults() {
        let p = Personalization::from_query("from=Ana");
        assert_eq!(p.to, DEFAULT_RECIPIENT);
        assert!(!p.is_personalized());
        assert_eq!(p.to_query(), "from=Ana");
    }

    #[test]
    fn test_query_roundtrip_with_spaces() {
        let p = Personalization::new("Ana Clara", "Bruno & Co");
        assert_eq!(Personalization::from_query(&p.to_query()), p);
    }

    #[test]
    fn test_to_query_encodes_form_style() {
        let p = Personalization::new("Ana Clara", "Bruno & Co");
        assert_eq!(p.to_query(), "from=Ana+Clara&to=Bruno+%26+Co");
    }

    #[test]
    fn test_from_query_ignores_bare_keys() {
        let p = Personalization::from_query("to&from=Ana");
        assert_eq!(p.from, "Ana");
        assert_eq!(p.to, DEFAULT_RECIPIENT);
    }

    #[test]
    fn test_render() {
        let p = Personalization::new("Ana", "");
        assert_eq!(
            p.render("For {toName}, from {fromName}"),
            "For my love, from Ana"
        );
    }
}
