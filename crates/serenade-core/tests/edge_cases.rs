//! Edge case and boundary condition tests
//!
//! Stale media events, failures and recovery, terminal puzzle states and
//! unconfigured songs.

use serenade_core::puzzle::{PERSONAL_QUESTIONS, RIDDLES};
use serenade_core::{
    AudioController, BackendCommand, CardError, ChoiceOutcome, HeartOutcome, HeartSequence,
    MediaEvent, MediaFault, NowPlaying, PlayerPhase, PuzzleGate, RecordingBackend,
    RelationshipClock, RiddleOutcome, SongRegistry, Track,
};

const OLD: &str = "https://songs.example/old.mp3";
const NEW: &str = "https://songs.example/new.mp3";

fn switched_player() -> AudioController<RecordingBackend> {
    let mut player = AudioController::new(RecordingBackend::new());
    player.load_track(Track::new("Old", OLD)).unwrap();
    player.load_track(Track::new("New", NEW)).unwrap();
    player.backend_mut().take_commands();
    player
}

// ============================================================================
// Stale Events
// ============================================================================

/// Events from a superseded load are dropped
#[test]
fn test_stale_metadata_ignored() {
    let mut player = switched_player();
    let applied = player.handle_event(MediaEvent::MetadataReady {
        src: OLD.to_string(),
        duration: 300.0,
    });
    assert!(!applied);
    assert_eq!(player.state().duration, 0.0);
    assert_eq!(player.phase(), PlayerPhase::Loading);
}

#[test]
fn test_stale_failure_ignored() {
    let mut player = switched_player();
    player.handle_event(MediaEvent::Failed {
        src: OLD.to_string(),
        fault: MediaFault::Network,
    });
    assert!(player.state().error.is_none());
    assert_eq!(player.phase(), PlayerPhase::Loading);
}

#[test]
fn test_stale_can_play_does_not_autoplay() {
    let mut player = switched_player();
    player.handle_event(MediaEvent::CanPlay {
        src: OLD.to_string(),
    });
    assert_eq!(player.backend().play_requests(), 0);
}

#[test]
fn test_events_without_track_ignored() {
    let mut player = AudioController::new(RecordingBackend::new());
    assert!(!player.handle_event(MediaEvent::PlayStarted {
        src: NEW.to_string()
    }));
    assert_eq!(player.phase(), PlayerPhase::Empty);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_load_failure_sets_error() {
    let mut player = switched_player();
    player.handle_event(MediaEvent::Failed {
        src: NEW.to_string(),
        fault: MediaFault::from_media_error_code(4),
    });
    let state = player.state();
    assert_eq!(player.phase(), PlayerPhase::Error);
    assert!(!state.is_loading);
    assert!(!state.is_playing);
    assert_eq!(
        state.error.as_deref(),
        Some("Audio format not supported or invalid URL")
    );
}

/// Play after a load failure reloads the same source
#[test]
fn test_play_after_failure_reloads() {
    let mut player = switched_player();
    player.handle_event(MediaEvent::Failed {
        src: NEW.to_string(),
        fault: MediaFault::Network,
    });
    player.toggle_play();
    assert_eq!(player.phase(), PlayerPhase::Loading);
    assert!(player.state().error.is_none());
    assert_eq!(
        player.backend().commands(),
        &[BackendCommand::SetSource(NEW.to_string())]
    );
}

/// A new track recovers from an error
#[test]
fn test_load_after_failure_recovers() {
    let mut player = switched_player();
    player.handle_event(MediaEvent::Failed {
        src: NEW.to_string(),
        fault: MediaFault::Decode,
    });
    player.load_track(Track::new("Old", OLD)).unwrap();
    assert_eq!(player.phase(), PlayerPhase::Loading);
    assert!(player.state().error.is_none());
    assert!(player.last_fault().is_none());
}

#[test]
fn test_non_finite_duration_treated_as_unknown() {
    let mut player = switched_player();
    player.handle_event(MediaEvent::MetadataReady {
        src: NEW.to_string(),
        duration: f64::INFINITY,
    });
    assert_eq!(player.state().duration, 0.0);
    player.seek(10.0);
    assert_eq!(player.state().current_time, 0.0);
}

#[test]
fn test_play_while_loading_is_deferred() {
    let mut player = switched_player();
    player.toggle_play();
    assert_eq!(player.backend().play_requests(), 0);
    assert_eq!(player.phase(), PlayerPhase::Loading);
}

#[test]
fn test_pause_with_nothing_loaded() {
    let mut player = AudioController::new(RecordingBackend::new());
    player.backend_mut().take_commands();
    player.pause();
    player.toggle_play();
    assert!(player.backend().commands().is_empty());
}

// ============================================================================
// Puzzle Terminal States
// ============================================================================

#[test]
fn test_blocked_ignores_everything() {
    let mut gate = PuzzleGate::from_parts(
        RIDDLES[1],
        HeartSequence::new([1, 2, 3, 4]).unwrap(),
        PERSONAL_QUESTIONS[4],
        || panic!("must not unlock"),
    );
    gate.submit_answer("me");
    for heart in 1..=4 {
        gate.click_heart(heart);
    }
    gate.select_choice(0);
    assert_eq!(gate.confirm_choice(), ChoiceOutcome::Blocked);

    assert_eq!(gate.submit_answer("me"), RiddleOutcome::Ignored);
    assert_eq!(gate.click_heart(1), HeartOutcome::Ignored);
    assert!(!gate.select_choice(3));
    assert_eq!(gate.confirm_choice(), ChoiceOutcome::Ignored);
    assert!(gate.state().blocked);
}

#[test]
fn test_select_out_of_range_choice() {
    let mut gate = PuzzleGate::from_parts(
        RIDDLES[2],
        HeartSequence::new([4, 3, 2, 1]).unwrap(),
        PERSONAL_QUESTIONS[0],
        || {},
    );
    gate.submit_answer("style");
    for heart in [4, 3, 2, 1] {
        gate.click_heart(heart);
    }
    assert!(!gate.select_choice(4));
    assert_eq!(gate.state().selected_choice, None);
}

#[test]
fn test_empty_riddle_answer_counts_as_wrong() {
    let mut gate = PuzzleGate::from_parts(
        RIDDLES[0],
        HeartSequence::new([1, 2, 3, 4]).unwrap(),
        PERSONAL_QUESTIONS[0],
        || {},
    );
    assert!(matches!(
        gate.submit_answer("   "),
        RiddleOutcome::Incorrect { attempts: 1, .. }
    ));
}

// ============================================================================
// Registry and Config
// ============================================================================

#[test]
fn test_unconfigured_song_is_not_selected() {
    let registry = SongRegistry::builtin();
    let mut now_playing = NowPlaying::new();
    now_playing.select_title(&registry, "Red", false);
    let before = now_playing.clone();

    assert!(!now_playing.select_title(&registry, "Cardigan", false));
    assert_eq!(now_playing, before);
}

#[test]
fn test_missing_overrides_file() {
    let mut registry = SongRegistry::builtin();
    let err = registry
        .load_overrides("/definitely/not/here/songs.json")
        .unwrap_err();
    assert!(matches!(err, CardError::Io(_)));
    assert_eq!(registry.len(), 36);
}

#[test]
fn test_invalid_start_date() {
    let err = RelationshipClock::from_date_str("2024-02-30").unwrap_err();
    assert!(matches!(err, CardError::InvalidDate(_)));
}
