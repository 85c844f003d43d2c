//! Song registry: song title to audio url.
//!
//! Titles with an empty url are known to the letters but have no audio yet;
//! the player must never be asked to load them.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::CardResult;
use crate::types::Track;

const BASE_URL: &str = "https://f005.backblazeb2.com/file/Swiftlove/";

/// Built-in table. Entries with an empty path are unconfigured.
const BUILTIN_SONGS: &[(&str, &str)] = &[
    ("Enchanted", "Taylor+Swift+-+Enchanted+(Taylor's+Version)+(Lyric+Video).mp3"),
    ("Daylight", "Taylor+Swift+-+Daylight+(Official+Audio).mp3"),
    ("Lover", "Taylor+Swift+-+Lover+(Official+Music+Video).mp3"),
    ("The Archer", "Taylor+Swift+-+The+Archer+(Lyric+Video).mp3"),
    ("Love Story", "Taylor+Swift+-+Love+Story.mp3"),
    ("All Too Well", "All+Too+Well+(10+Minute+Version)+(Taylor's+Version)+(From+The+Vault)+(Lyric+Video).mp3"),
    ("Cruel Summer", "Taylor+Swift+-+Cruel+Summer+(Official+Audio).mp3"),
    ("Safe & Sound", "Safe+%26+Sound+feat.+The+Civil+Wars+(The+Hunger+Games%EF%BC%9A+Songs+From+District+12+And+Beyond).mp3"),
    ("Begin Again", "Taylor+Swift+-+Begin+Again.mp3"),
    ("Sweet Nothing", "taylor+swift+-+sweet+nothing+(tradu%C3%A7%C3%A3o%E2%A7%B8legendado).mp3"),
    ("Everything Has Changed", "Taylor+Swift+-+Everything+Has+Changed+ft.+Ed+Sheeran.mp3"),
    ("End Game", "Taylor+Swift+-+End+Game+ft.+Ed+Sheeran%2C+Future.mp3"),
    ("Style", "Taylor+Swift+-+Style.mp3"),
    ("You Belong With Me", "Taylor+Swift+-+You+Belong+With+Me.mp3"),
    ("Bad Blood", "Taylor+Swift+-+Bad+Blood+ft.+Kendrick+Lamar.mp3"),
    ("Wildest Dreams", "Taylor+Swift+-+Wildest+Dreams.mp3"),
    ("Forever & Always", "Taylor+Swift+-+Forever+%26+Always+(Taylor's+Version)+(Lyric+Video).mp3"),
    ("Back To December", "Taylor+Swift+-+Back+To+December.mp3"),
    ("Invisible String", "Taylor+Swift+%E2%80%93+invisible+string+(Official+Lyric+Video).mp3"),
    ("You Are In Love", "Taylor+Swift+-+You+Are+In+Love+(Taylor's+Version)+(Lyric+Video).mp3"),
    ("Fearless", "Taylor+Swift+-+Fearless+(Taylor's+Version)+(Lyric+Video).mp3"),
    ("Red", "Taylor+Swift+-+Red+(Taylor's+Version)+(Lyric+Video).mp3"),
    ("Blank Space", ""),
    ("Cardigan", ""),
    ("Willow", ""),
    ("Anti-Hero", ""),
    ("Lavender Haze", ""),
    ("Midnight Rain", ""),
    ("Karma", ""),
    ("Paper Rings", ""),
    ("August", ""),
    ("Folklore", ""),
    ("The 1", ""),
    ("Champagne Problems", ""),
    ("Evermore", ""),
    ("Right Where You Left Me", ""),
];

/// Static mapping from song title to audio url.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongRegistry {
    urls: BTreeMap<String, String>,
}

impl SongRegistry {
    /// Registry with no songs at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// The card's built-in song table
    pub fn builtin() -> Self {
        let urls = BUILTIN_SONGS
            .iter()
            .map(|(title, path)| {
                let url = if path.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", BASE_URL, path)
                };
                (title.to_string(), url)
            })
            .collect();
        Self { urls }
    }

    /// Add or replace a single entry
    pub fn insert(&mut self, title: impl Into<String>, url: impl Into<String>) {
        self.urls.insert(title.into(), url.into());
    }

    /// Url for `title`, or `""` when the title is unknown or unconfigured.
    pub fn lookup(&self, title: &str) -> &str {
        self.urls.get(title).map(String::as_str).unwrap_or("")
    }

    /// Whether `title` has a playable url
    pub fn has_url(&self, title: &str) -> bool {
        !self.lookup(title).trim().is_empty()
    }

    /// Build a track for `title` if it has a playable url.
    pub fn track(&self, title: &str, loop_playback: bool) -> Option<Track> {
        if !self.has_url(title) {
            debug!(title, "No url configured for song");
            return None;
        }
        Some(Track {
            title: title.to_string(),
            url: self.lookup(title).to_string(),
            loop_playback,
        })
    }

    /// All titles that have a playable url, in title order.
    pub fn titles_with_urls(&self) -> Vec<&str> {
        self.urls
            .iter()
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|(title, _)| title.as_str())
            .collect()
    }

    /// Number of known titles (configured or not)
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Merge `{ "Title": "url" }` entries from a JSON file over this registry.
    ///
    /// Returns how many entries were merged.
    pub fn load_overrides(&mut self, path: impl AsRef<Path>) -> CardResult<usize> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let overrides: BTreeMap<String, String> = serde_json::from_str(&raw)?;
        let count = overrides.len();
        self.urls.extend(overrides);
        info!(?path, count, "Loaded song url overrides");
        Ok(count)
    }
}
