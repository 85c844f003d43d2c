//! The card's "now playing" selection.
//!
//! Song titles in the prose, the letter generator and the secret page all pick
//! music. They go through this one owned value instead of a shared global; the
//! player controller is its only consumer.

use tracing::debug;

use crate::songs::SongRegistry;
use crate::types::Track;

/// The single current track selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NowPlaying {
    current: Option<Track>,
}

impl NowPlaying {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected track, if any
    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Replace the selection. Tracks without a url are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn select(&mut self, track: Track) -> bool {
        if track.url.trim().is_empty() {
            debug!(title = %track.title, "Ignoring selection without url");
            return false;
        }
        if self.current.as_ref() == Some(&track) {
            return false;
        }
        debug!(%track, "Song selected");
        self.current = Some(track);
        true
    }

    /// Select a song by title through the registry.
    ///
    /// Unknown or unconfigured titles leave the selection untouched.
    pub fn select_title(&mut self, registry: &SongRegistry, title: &str, loop_playback: bool) -> bool {
        match registry.track(title, loop_playback) {
            Some(track) => self.select(track),
            None => false,
        }
    }

    /// Drop the selection
    pub fn clear(&mut self) -> Option<Track> {
        self.current.take()
    }
}
