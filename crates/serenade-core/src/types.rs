//! Core types for Serenade

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// A playable audio item.
///
/// Tracks are identified by their `url`: two tracks with the same url are the
/// same source as far as the player is concerned, even if titles differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Song title as it appears in the letter prose
    pub title: String,
    /// Publicly reachable audio file url
    pub url: String,
    /// Restart from the beginning when the track ends
    #[serde(default)]
    pub loop_playback: bool,
}

impl Track {
    /// Create a non-looping track
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            loop_playback: false,
        }
    }

    /// Create a track that loops forever
    pub fn looping(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            loop_playback: true,
            ..Self::new(title, url)
        }
    }

    /// Reject tracks without a source url.
    pub fn validate(&self) -> CardResult<()> {
        if self.url.trim().is_empty() {
            return Err(CardError::InvalidTrack(format!(
                "'{}' has no audio url",
                self.title
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.loop_playback {
            write!(f, "{} (loop)", self.title)
        } else {
            write!(f, "{}", self.title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_constructors() {
        let plain = Track::new("Lover", "https://example.com/lover.mp3");
        assert!(!plain.loop_playback);

        let looped = Track::looping("Enchanted", "https://example.com/enchanted.mp3");
        assert!(looped.loop_playback);
        assert_eq!(looped.to_string(), "Enchanted (loop)");
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        assert!(Track::new("Karma", "").validate().is_err());
        assert!(Track::new("Karma", "   ").validate().is_err());
        assert!(Track::new("Red", "https://example.com/red.mp3").validate().is_ok());
    }

    #[test]
    fn test_track_serde_default_loop() {
        let json = r#"{"title":"Red","url":"https://example.com/red.mp3"}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert!(!track.loop_playback);
    }
}
