//! Four-stage puzzle gate in front of the secret letter.

use std::fmt;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use super::content::{
    HeartSequence, PersonalQuestion, Riddle, HEART_COUNT, HEART_SEQUENCES, PERSONAL_QUESTIONS,
    RIDDLES,
};

/// How long a wrong heart sequence stays on screen before it is cleared.
pub const SEQUENCE_FEEDBACK_DELAY: Duration = Duration::from_millis(500);
/// Pause between finishing the heart sequence and showing the question.
pub const STAGE_ADVANCE_DELAY: Duration = Duration::from_millis(500);
/// Celebration shown between the correct answer and the secret letter.
pub const UNLOCK_CELEBRATION_DELAY: Duration = Duration::from_millis(2500);

/// Wrong riddle answers (counted before the current one) after which the hint unlocks.
const HINT_AFTER_ATTEMPTS: u32 = 2;

/// Puzzle stage; only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum PuzzleStage {
    #[default]
    Riddle,
    Sequence,
    Question,
    Unlocked,
}

impl PuzzleStage {
    /// 1-based step number shown in the progress indicator
    pub const fn number(&self) -> u8 {
        match self {
            PuzzleStage::Riddle => 1,
            PuzzleStage::Sequence => 2,
            PuzzleStage::Question => 3,
            PuzzleStage::Unlocked => 4,
        }
    }
}

impl fmt::Display for PuzzleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleStage::Riddle => write!(f, "Riddle"),
            PuzzleStage::Sequence => write!(f, "Heart sequence"),
            PuzzleStage::Question => write!(f, "Personal question"),
            PuzzleStage::Unlocked => write!(f, "Unlocked"),
        }
    }
}

/// Observable puzzle progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleState {
    pub step: PuzzleStage,
    /// Wrong riddle answers so far
    pub attempts: u32,
    /// Hearts clicked in the current try
    pub clicked_sequence: Vec<u8>,
    /// Option picked in the personal question, not yet confirmed
    pub selected_choice: Option<usize>,
    /// Wrong personal answer; nothing else can happen this session
    pub blocked: bool,
}

/// Result of submitting a riddle answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiddleOutcome {
    Correct,
    Incorrect { attempts: u32, hint_available: bool },
    Ignored,
}

/// Result of clicking a heart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeartOutcome {
    /// Still on track; `matched` hearts are correct so far
    Progress { matched: usize },
    /// Wrong heart; the click list was cleared. `attempted` is what was clicked.
    Mismatch { attempted: Vec<u8> },
    /// Full sequence entered; moved on to the personal question
    Complete,
    Ignored,
}

/// Result of confirming the personal question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    Unlocked,
    Blocked,
    NoSelection,
    Ignored,
}

/// The puzzle for one session.
///
/// The riddle, heart sequence and question are drawn once at construction
/// and never change for the lifetime of the gate.
pub struct PuzzleGate {
    riddle: Riddle,
    sequence: HeartSequence,
    question: PersonalQuestion,
    state: PuzzleState,
    hint_available: bool,
    on_solved: Option<Box<dyn FnOnce()>>,
}

impl PuzzleGate {
    /// Draw a fresh puzzle with the thread-local RNG
    pub fn new(on_solved: impl FnOnce() + 'static) -> Self {
        Self::with_rng(&mut rand::rng(), on_solved)
    }

    /// Draw a fresh puzzle from `rng`
    pub fn with_rng<R: Rng>(rng: &mut R, on_solved: impl FnOnce() + 'static) -> Self {
        let riddle = RIDDLES[rng.random_range(0..RIDDLES.len())];
        let sequence = HEART_SEQUENCES[rng.random_range(0..HEART_SEQUENCES.len())];
        let question = PERSONAL_QUESTIONS[rng.random_range(0..PERSONAL_QUESTIONS.len())];
        Self::from_parts(riddle, sequence, question, on_solved)
    }

    /// Build a puzzle from explicit parts
    pub fn from_parts(
        riddle: Riddle,
        sequence: HeartSequence,
        question: PersonalQuestion,
        on_solved: impl FnOnce() + 'static,
    ) -> Self {
        debug!(answer = riddle.answer, %sequence, "Puzzle drawn");
        Self {
            riddle,
            sequence,
            question,
            state: PuzzleState::default(),
            hint_available: false,
            on_solved: Some(Box::new(on_solved)),
        }
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn stage(&self) -> PuzzleStage {
        self.state.step
    }

    pub fn is_blocked(&self) -> bool {
        self.state.blocked
    }

    pub fn is_unlocked(&self) -> bool {
        self.state.step == PuzzleStage::Unlocked
    }

    pub fn riddle(&self) -> &Riddle {
        &self.riddle
    }

    pub fn sequence(&self) -> &HeartSequence {
        &self.sequence
    }

    pub fn question(&self) -> &PersonalQuestion {
        &self.question
    }

    /// The riddle hint, once enough wrong answers were given
    pub fn hint(&self) -> Option<&'static str> {
        self.hint_available.then_some(self.riddle.hint)
    }

    /// Stage 1: check a riddle answer.
    pub fn submit_answer(&mut self, input: &str) -> RiddleOutcome {
        if !self.accepts(PuzzleStage::Riddle) {
            return RiddleOutcome::Ignored;
        }

        if self.riddle.accepts(input) {
            info!("Riddle solved");
            self.advance(PuzzleStage::Sequence);
            return RiddleOutcome::Correct;
        }

        if self.state.attempts >= HINT_AFTER_ATTEMPTS {
            self.hint_available = true;
        }
        self.state.attempts += 1;
        debug!(attempts = self.state.attempts, "Wrong riddle answer");
        RiddleOutcome::Incorrect {
            attempts: self.state.attempts,
            hint_available: self.hint_available,
        }
    }

    /// Stage 2: click the heart labelled `heart` (1..=4).
    pub fn click_heart(&mut self, heart: u8) -> HeartOutcome {
        if !self.accepts(PuzzleStage::Sequence) || !(1..=HEART_COUNT as u8).contains(&heart) {
            return HeartOutcome::Ignored;
        }

        self.state.clicked_sequence.push(heart);
        if !self.sequence.is_prefix(&self.state.clicked_sequence) {
            let attempted = std::mem::take(&mut self.state.clicked_sequence);
            debug!(?attempted, "Wrong heart sequence");
            return HeartOutcome::Mismatch { attempted };
        }

        let matched = self.state.clicked_sequence.len();
        if matched == HEART_COUNT {
            info!("Heart sequence complete");
            self.advance(PuzzleStage::Question);
            return HeartOutcome::Complete;
        }
        HeartOutcome::Progress { matched }
    }

    /// Stage 2: start the heart sequence over.
    pub fn reset_hearts(&mut self) {
        if self.accepts(PuzzleStage::Sequence) {
            self.state.clicked_sequence.clear();
        }
    }

    /// Stage 3: pick an option. Picking is free; only confirming counts.
    pub fn select_choice(&mut self, index: usize) -> bool {
        if !self.accepts(PuzzleStage::Question) || index >= self.question.options.len() {
            return false;
        }
        self.state.selected_choice = Some(index);
        true
    }

    /// Stage 3: confirm the picked option. There is exactly one chance.
    pub fn confirm_choice(&mut self) -> ChoiceOutcome {
        if !self.accepts(PuzzleStage::Question) {
            return ChoiceOutcome::Ignored;
        }
        let Some(choice) = self.state.selected_choice else {
            return ChoiceOutcome::NoSelection;
        };

        if choice == self.question.correct {
            info!("Puzzle unlocked");
            self.advance(PuzzleStage::Unlocked);
            if let Some(on_solved) = self.on_solved.take() {
                on_solved();
            }
            ChoiceOutcome::Unlocked
        } else {
            info!("Wrong personal answer, letter blocked");
            self.state.blocked = true;
            ChoiceOutcome::Blocked
        }
    }

    fn accepts(&self, stage: PuzzleStage) -> bool {
        !self.state.blocked && self.state.step == stage
    }

    fn advance(&mut self, next: PuzzleStage) {
        debug_assert!(next > self.state.step);
        self.state.step = next;
    }
}

impl fmt::Debug for PuzzleGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PuzzleGate")
            .field("state", &self.state)
            .field("sequence", &self.sequence)
            .field("hint_available", &self.hint_available)
            .finish_non_exhaustive()
    }
}
