//! Serenade Core Library
//!
//! Playback and puzzle logic behind a musical love-letter card.
//!
//! ## Overview
//!
//! Serenade is a greeting card: a letter whose prose is sprinkled with song
//! titles. Clicking a title plays the song; a four-stage puzzle unlocks a
//! secret letter. Everything that decides *what happens* lives here, free of
//! any UI toolkit, so it can be driven by a fake media backend in tests.
//!
//! ## Core Pieces
//!
//! - **Player**: an explicit state machine over an abstract media backend
//! - **Puzzle gate**: riddle, heart sequence, personal question, unlock
//! - **Letters**: song-marked prose and a song-inspired letter generator
//!
//! ## Quick Start
//!
//! ```ignore
//! use serenade_core::{AudioController, NowPlaying, RecordingBackend, SongRegistry};
//!
//! let registry = SongRegistry::builtin();
//! let mut now_playing = NowPlaying::new();
//! let mut player = AudioController::new(RecordingBackend::new());
//!
//! if now_playing.select_title(&registry, "Enchanted", false) {
//!     if let Some(track) = now_playing.current() {
//!         player.load_track(track.clone())?;
//!     }
//! }
//! ```

pub mod clock;
pub mod error;
pub mod letters;
pub mod personalization;
pub mod player;
pub mod puzzle;
pub mod selection;
pub mod share;
pub mod songs;
pub mod types;

// Re-exports
pub use clock::{ElapsedTime, RelationshipClock};
pub use error::{CardError, CardResult, MediaFault};
pub use letters::{parse_segments, Letter, LetterGenerator, Segment, HOME_PARAGRAPHS};
pub use personalization::Personalization;
pub use player::{
    format_time, AudioController, BackendCommand, MediaBackend, MediaEvent, PlayOrigin,
    PlaybackState, PlayerPhase, RecordingBackend, DEFAULT_VOLUME,
};
pub use puzzle::{
    ChoiceOutcome, HeartOutcome, HeartSequence, PersonalQuestion, PuzzleGate, PuzzleStage,
    PuzzleState, Riddle, RiddleOutcome,
};
pub use selection::NowPlaying;
pub use share::{ShareAction, ShareLink, ShareTarget};
pub use songs::SongRegistry;
pub use types::*;
