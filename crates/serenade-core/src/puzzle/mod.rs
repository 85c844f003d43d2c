//! Puzzle gate that unlocks the secret letter.
//!
//! ```text
//! Riddle ──► Sequence ──► Question ──► Unlocked
//!   ↺ retry    ↺ retry        │
//!                             └──► blocked (terminal)
//! ```

mod content;
mod gate;

pub use content::{
    HeartSequence, PersonalQuestion, Riddle, HEART_COUNT, HEART_SEQUENCES, PERSONAL_QUESTIONS,
    RIDDLES,
};
pub use gate::{
    ChoiceOutcome, HeartOutcome, PuzzleGate, PuzzleStage, PuzzleState, RiddleOutcome,
    SEQUENCE_FEEDBACK_DELAY, STAGE_ADVANCE_DELAY, UNLOCK_CELEBRATION_DELAY,
};
