//! Background music player.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────┐  load/play/pause/seek   ┌──────────────────┐
//! │  UI / caller │ ──────────────────────► │ AudioController  │
//! └──────────────┘                         │  (state machine) │
//!                                          └──────┬─────▲─────┘
//!                               MediaBackend cmds │     │ MediaEvent
//!                                          ┌──────▼─────┴─────┐
//!                                          │  media element   │
//!                                          └──────────────────┘
//! ```
//!
//! The controller is the only writer of the current track. Tests drive it
//! with [`RecordingBackend`] and hand-written events.

mod backend;
mod controller;
mod events;
mod state;

pub use backend::{BackendCommand, MediaBackend, RecordingBackend};
pub use controller::{AudioController, DEFAULT_VOLUME};
pub use events::{MediaEvent, PlayOrigin};
pub use state::{format_time, PlaybackState, PlayerPhase};
