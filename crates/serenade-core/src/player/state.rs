//! Observable playback state.

use std::fmt;

/// Where the player is in its lifecycle.
///
/// ```text
/// Empty ─► Loading ─► Ready ◄──► Playing
///              │        │           │
///              └────────┴───► Error ◄┘   (recoverable)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerPhase {
    /// No track selected
    #[default]
    Empty,
    /// Source requested, waiting for metadata
    Loading,
    /// Loaded and paused
    Ready,
    /// Audio running
    Playing,
    /// Load or play failed; a new load or play request may recover
    Error,
}

impl fmt::Display for PlayerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerPhase::Empty => write!(f, "Empty"),
            PlayerPhase::Loading => write!(f, "Loading"),
            PlayerPhase::Ready => write!(f, "Ready"),
            PlayerPhase::Playing => write!(f, "Playing"),
            PlayerPhase::Error => write!(f, "Error"),
        }
    }
}

/// Snapshot of the player as the UI should render it.
///
/// `is_playing` and `is_loading` are never both true, and `current_time`
/// never exceeds a known `duration`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    /// Audio is running
    pub is_playing: bool,
    /// Position in seconds
    pub current_time: f64,
    /// Duration in seconds, 0 until metadata arrives
    pub duration: f64,
    /// Waiting for the source to load
    pub is_loading: bool,
    /// Human-readable status for the last failure, if any
    pub error: Option<String>,
}

impl PlaybackState {
    /// State right after a new source was requested
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// Progress through the track in percent (0 when duration is unknown)
    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

/// Format seconds as `m:ss`.
pub fn format_time(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.9), "0:09");
        assert_eq!(format_time(61.0), "1:01");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn test_progress_percent() {
        let mut state = PlaybackState::default();
        assert_eq!(state.progress_percent(), 0.0);

        state.duration = 200.0;
        state.current_time = 50.0;
        assert_eq!(state.progress_percent(), 25.0);
    }

    #[test]
    fn test_loading_state() {
        let state = PlaybackState::loading();
        assert!(state.is_loading);
        assert!(!state.is_playing);
        assert_eq!(state.duration, 0.0);
    }
}
