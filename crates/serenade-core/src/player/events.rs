//! Inbound media lifecycle events.
//!
//! Every event names the source url it was produced for, so the controller
//! can drop events that belong to a load that has since been superseded.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  MediaEvent: fired by the media pipeline, never by the caller   │
//! │  ├── MetadataReady: duration known                              │
//! │  ├── CanPlay: enough data buffered to start                     │
//! │  ├── Progress: playback position moved                          │
//! │  ├── Ended: reached the end of the source                       │
//! │  ├── Failed: load/decode error                                  │
//! │  ├── PlayStarted / PlayRejected: outcome of a play request      │
//! │  └── Paused: element paused                                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::error::MediaFault;

/// Events emitted by a media backend.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Metadata loaded; the duration is now known
    MetadataReady {
        /// Source the event belongs to
        src: String,
        /// Duration in seconds (may be NaN/inf for streams)
        duration: f64,
    },
    /// The element can start playing
    CanPlay {
        /// Source the event belongs to
        src: String,
    },
    /// Playback position changed
    Progress {
        /// Source the event belongs to
        src: String,
        /// Position in seconds
        position: f64,
    },
    /// Playback reached the end of the source
    Ended {
        /// Source the event belongs to
        src: String,
    },
    /// The source failed to load or decode
    Failed {
        /// Source the event belongs to
        src: String,
        /// Classified cause
        fault: MediaFault,
    },
    /// A play request resolved and audio is running
    PlayStarted {
        /// Source the event belongs to
        src: String,
    },
    /// A play request was refused by the platform
    PlayRejected {
        /// Source the event belongs to
        src: String,
        /// Classified cause (usually `PermissionDenied`)
        fault: MediaFault,
    },
    /// The element paused
    Paused {
        /// Source the event belongs to
        src: String,
    },
}

impl MediaEvent {
    /// Source url this event was produced for
    pub fn src(&self) -> &str {
        match self {
            MediaEvent::MetadataReady { src, .. }
            | MediaEvent::CanPlay { src }
            | MediaEvent::Progress { src, .. }
            | MediaEvent::Ended { src }
            | MediaEvent::Failed { src, .. }
            | MediaEvent::PlayStarted { src }
            | MediaEvent::PlayRejected { src, .. }
            | MediaEvent::Paused { src } => src,
        }
    }

    /// Short event name for logs
    pub fn name(&self) -> &'static str {
        match self {
            MediaEvent::MetadataReady { .. } => "metadata-ready",
            MediaEvent::CanPlay { .. } => "can-play",
            MediaEvent::Progress { .. } => "progress",
            MediaEvent::Ended { .. } => "ended",
            MediaEvent::Failed { .. } => "error",
            MediaEvent::PlayStarted { .. } => "play-started",
            MediaEvent::PlayRejected { .. } => "play-rejected",
            MediaEvent::Paused { .. } => "paused",
        }
    }
}

impl fmt::Display for MediaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.src())
    }
}

/// Who asked for playback to start.
///
/// At most one play request is in flight at a time; the origin decides how a
/// rejection is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOrigin {
    /// The controller started playback on its own once the track was ready
    Autoplay,
    /// The listener pressed play
    User,
    /// Restarting a looping track after it ended
    Loop,
}
