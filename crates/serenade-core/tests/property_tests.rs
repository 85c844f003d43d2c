//! Property-based tests for the player and puzzle
//!
//! Uses proptest to check the invariants that must hold for any input.

use proptest::prelude::*;
use serenade_core::puzzle::{PERSONAL_QUESTIONS, RIDDLES};
use serenade_core::{
    AudioController, ElapsedTime, HeartOutcome, HeartSequence, MediaEvent, Personalization,
    PuzzleGate, PuzzleStage, RecordingBackend, Track,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any permutation of the hearts 1..=4
fn sequence_strategy() -> impl Strategy<Value = HeartSequence> {
    Just(vec![1u8, 2, 3, 4])
        .prop_shuffle()
        .prop_map(|v| HeartSequence::new([v[0], v[1], v[2], v[3]]).expect("permutation"))
}

/// Positive durations a real file could report
fn duration_strategy() -> impl Strategy<Value = f64> {
    1.0f64..7200.0
}

fn url_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("https://songs\\.example/[a-z]{1,12}\\.mp3").expect("valid regex")
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-zÀ-ÿ &%+=?]{0,20}").expect("valid regex")
}

fn ready_player(url: &str, duration: f64) -> AudioController<RecordingBackend> {
    let mut player = AudioController::new(RecordingBackend::new()).with_autoplay(false);
    player.load_track(Track::new("Song", url)).expect("valid track");
    player.handle_event(MediaEvent::MetadataReady {
        src: url.to_string(),
        duration,
    });
    player
}

// ============================================================================
// Player Properties
// ============================================================================

proptest! {
    /// Seek always lands inside [0, duration]
    #[test]
    fn seek_is_clamped(duration in duration_strategy(), target in -1.0e6f64..1.0e6) {
        let mut player = ready_player("https://songs.example/a.mp3", duration);
        player.seek(target);
        let t = player.state().current_time;
        prop_assert!((0.0..=duration).contains(&t));
        if (0.0..=duration).contains(&target) {
            prop_assert_eq!(t, target);
        }
    }

    /// Progress reports never push the position past the duration
    #[test]
    fn progress_is_clamped(duration in duration_strategy(), position in -100.0f64..10_000.0) {
        let url = "https://songs.example/a.mp3";
        let mut player = ready_player(url, duration);
        player.handle_event(MediaEvent::Progress { src: url.to_string(), position });
        let t = player.state().current_time;
        prop_assert!(t >= 0.0 && t <= duration);
    }

    /// Loading the same url again changes nothing
    #[test]
    fn same_url_load_is_idempotent(url in url_strategy(), duration in duration_strategy(), pos in 0.0f64..1.0) {
        let mut player = ready_player(&url, duration);
        player.seek(pos * duration);
        let before = player.state().clone();
        let commands = player.backend().commands().len();

        prop_assert!(!player.load_track(Track::new("Other title", url.clone())).unwrap());
        prop_assert_eq!(player.state(), &before);
        prop_assert_eq!(player.backend().commands().len(), commands);
    }

    /// A different url always resets time and duration
    #[test]
    fn new_url_resets_progress(a in url_strategy(), b in url_strategy(), duration in duration_strategy()) {
        prop_assume!(a != b);
        let mut player = ready_player(&a, duration);
        player.seek(duration / 2.0);
        prop_assert!(player.load_track(Track::new("B", b)).unwrap());
        prop_assert_eq!(player.state().current_time, 0.0);
        prop_assert_eq!(player.state().duration, 0.0);
        prop_assert!(player.state().is_loading);
        prop_assert!(!player.state().is_playing);
    }
}

// ============================================================================
// Puzzle Properties
// ============================================================================

proptest! {
    /// The first wrong heart clears the clicks; stage never moves backwards
    #[test]
    fn wrong_heart_clears_clicks(sequence in sequence_strategy(), clicks in prop::collection::vec(1u8..=4, 1..12)) {
        let mut gate = PuzzleGate::from_parts(RIDDLES[0], sequence, PERSONAL_QUESTIONS[0], || {});
        gate.submit_answer(RIDDLES[0].answer);

        for heart in clicks {
            let before = gate.stage();
            match gate.click_heart(heart) {
                HeartOutcome::Mismatch { attempted } => {
                    prop_assert!(!sequence.is_prefix(&attempted));
                    prop_assert!(gate.state().clicked_sequence.is_empty());
                }
                HeartOutcome::Progress { matched } => {
                    prop_assert_eq!(matched, gate.state().clicked_sequence.len());
                    prop_assert!(sequence.is_prefix(&gate.state().clicked_sequence));
                }
                HeartOutcome::Complete => {
                    prop_assert_eq!(gate.stage(), PuzzleStage::Question);
                }
                HeartOutcome::Ignored => {
                    prop_assert_eq!(before, PuzzleStage::Question);
                }
            }
            prop_assert!(gate.stage() >= before);
        }
    }

    /// Riddle answers match regardless of case and surrounding whitespace
    #[test]
    fn riddle_normalization(index in 0..RIDDLES.len(), pad_left in "[ \t]{0,3}", pad_right in "[ \t\n]{0,3}", upper in any::<bool>()) {
        let riddle = RIDDLES[index];
        let answer = if upper { riddle.answer.to_uppercase() } else { riddle.answer.to_string() };
        let input = format!("{}{}{}", pad_left, answer, pad_right);
        prop_assert!(riddle.accepts(&input));
    }
}

// ============================================================================
// Clock and Names
// ============================================================================

proptest! {
    /// Elapsed time decomposition stays in range and adds back up
    #[test]
    fn elapsed_decomposition(total in 0i64..10_000_000_000) {
        let e = ElapsedTime::from_seconds(total);
        prop_assert!(e.hours < 24);
        prop_assert!(e.minutes < 60);
        prop_assert!(e.seconds < 60);
        prop_assert_eq!(e.total_seconds(), total);
    }

    /// Names survive the query string
    #[test]
    fn personalization_query(from in name_strategy(), to in name_strategy()) {
        let names = Personalization::new(from, to);
        prop_assert_eq!(Personalization::from_query(&names.to_query()), names);
    }
}
