//! Player controller behavior against a scripted backend
//!
//! Each test drives the controller through the events a real media element
//! would emit and checks both the observable state and the commands sent.

use std::cell::RefCell;
use std::rc::Rc;

use serenade_core::{
    AudioController, BackendCommand, MediaEvent, MediaFault, NowPlaying, PlayerPhase,
    RecordingBackend, SongRegistry, Track,
};

const ENCHANTED: &str = "https://songs.example/enchanted.mp3";
const DAYLIGHT: &str = "https://songs.example/daylight.mp3";

fn player() -> AudioController<RecordingBackend> {
    AudioController::new(RecordingBackend::new())
}

fn metadata(src: &str, duration: f64) -> MediaEvent {
    MediaEvent::MetadataReady {
        src: src.to_string(),
        duration,
    }
}

fn can_play(src: &str) -> MediaEvent {
    MediaEvent::CanPlay {
        src: src.to_string(),
    }
}

fn started(src: &str) -> MediaEvent {
    MediaEvent::PlayStarted {
        src: src.to_string(),
    }
}

fn ended(src: &str) -> MediaEvent {
    MediaEvent::Ended {
        src: src.to_string(),
    }
}

/// Load `url`, let it become ready and start playing via autoplay
fn playing(url: &str, duration: f64) -> AudioController<RecordingBackend> {
    let mut player = player();
    player.load_track(Track::new("Song", url)).unwrap();
    player.handle_event(metadata(url, duration));
    player.handle_event(can_play(url));
    player.handle_event(started(url));
    player.backend_mut().take_commands();
    player
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_enters_loading() {
    let mut player = player();
    assert!(player.load_track(Track::new("Enchanted", ENCHANTED)).unwrap());

    let state = player.state();
    assert_eq!(player.phase(), PlayerPhase::Loading);
    assert!(state.is_loading);
    assert!(!state.is_playing);
    assert_eq!(state.current_time, 0.0);
    assert_eq!(state.duration, 0.0);
    assert!(player
        .backend()
        .commands()
        .contains(&BackendCommand::SetSource(ENCHANTED.to_string())));
}

#[test]
fn test_switching_tracks_resets_position_and_duration() {
    let mut player = playing(ENCHANTED, 240.0);
    player.handle_event(MediaEvent::Progress {
        src: ENCHANTED.to_string(),
        position: 95.0,
    });

    assert!(player.load_track(Track::new("Daylight", DAYLIGHT)).unwrap());
    assert_eq!(player.state().current_time, 0.0);
    assert_eq!(player.state().duration, 0.0);
    assert!(!player.state().is_playing);
    assert_eq!(
        player.backend().commands(),
        &[
            BackendCommand::Pause,
            BackendCommand::SetSource(DAYLIGHT.to_string())
        ]
    );
}

#[test]
fn test_same_url_twice_is_noop() {
    let mut player = playing(ENCHANTED, 240.0);
    player.handle_event(MediaEvent::Progress {
        src: ENCHANTED.to_string(),
        position: 30.0,
    });

    let reloaded = player
        .load_track(Track::new("Enchanted (again)", ENCHANTED))
        .unwrap();
    assert!(!reloaded);
    assert_eq!(player.phase(), PlayerPhase::Playing);
    assert_eq!(player.state().current_time, 30.0);
    assert!(player.backend().commands().is_empty());
}

#[test]
fn test_empty_url_rejected() {
    let mut player = player();
    assert!(player.load_track(Track::new("Karma", "")).is_err());
    assert_eq!(player.phase(), PlayerPhase::Empty);
    assert!(player.current_track().is_none());
}

#[test]
fn test_clear_returns_to_empty() {
    let mut player = playing(ENCHANTED, 240.0);
    player.clear();
    assert_eq!(player.phase(), PlayerPhase::Empty);
    assert!(player.current_track().is_none());
    assert_eq!(
        player.backend().commands(),
        &[BackendCommand::Pause, BackendCommand::ClearSource]
    );
}

// ============================================================================
// Autoplay and user play
// ============================================================================

#[test]
fn test_autoplay_requested_once_per_load() {
    let mut player = player();
    player.load_track(Track::new("Enchanted", ENCHANTED)).unwrap();
    player.handle_event(metadata(ENCHANTED, 240.0));
    player.handle_event(can_play(ENCHANTED));
    player.handle_event(can_play(ENCHANTED));
    assert_eq!(player.backend().play_requests(), 1);
    assert!(player.play_pending());
}

#[test]
fn test_user_play_while_autoplay_pending_sends_nothing() {
    let mut player = player();
    player.load_track(Track::new("Enchanted", ENCHANTED)).unwrap();
    player.handle_event(can_play(ENCHANTED));
    player.toggle_play();
    assert_eq!(player.backend().play_requests(), 1);
}

#[test]
fn test_autoplay_rejection_waits_for_user() {
    let mut player = player();
    player.load_track(Track::new("Enchanted", ENCHANTED)).unwrap();
    player.handle_event(can_play(ENCHANTED));
    player.handle_event(MediaEvent::PlayRejected {
        src: ENCHANTED.to_string(),
        fault: MediaFault::from_rejection_name("NotAllowedError"),
    });

    assert_eq!(player.phase(), PlayerPhase::Ready);
    assert!(!player.state().is_playing);
    assert_eq!(
        player.state().error.as_deref(),
        Some("Tap play first to allow audio playback")
    );

    player.toggle_play();
    assert_eq!(player.backend().play_requests(), 2);
    player.handle_event(started(ENCHANTED));
    assert_eq!(player.phase(), PlayerPhase::Playing);
    assert!(player.state().error.is_none());
}

#[test]
fn test_user_play_rejection_enters_error_and_retries() {
    let mut player = player().with_autoplay(false);
    player.load_track(Track::new("Enchanted", ENCHANTED)).unwrap();
    player.handle_event(can_play(ENCHANTED));
    player.toggle_play();
    player.handle_event(MediaEvent::PlayRejected {
        src: ENCHANTED.to_string(),
        fault: MediaFault::PermissionDenied,
    });
    assert_eq!(player.phase(), PlayerPhase::Error);

    player.toggle_play();
    player.handle_event(started(ENCHANTED));
    assert_eq!(player.phase(), PlayerPhase::Playing);
}

#[test]
fn test_toggle_pauses_when_playing() {
    let mut player = playing(ENCHANTED, 240.0);
    player.toggle_play();
    assert_eq!(player.phase(), PlayerPhase::Ready);
    assert!(!player.state().is_playing);
    assert_eq!(player.backend().commands(), &[BackendCommand::Pause]);
}

// ============================================================================
// End of track
// ============================================================================

#[test]
fn test_loop_restarts_from_zero() {
    let mut player = player();
    player
        .load_track(Track::looping("Enchanted", ENCHANTED))
        .unwrap();
    player.handle_event(metadata(ENCHANTED, 240.0));
    player.handle_event(can_play(ENCHANTED));
    player.handle_event(started(ENCHANTED));
    player.backend_mut().take_commands();

    player.handle_event(ended(ENCHANTED));
    assert_eq!(player.phase(), PlayerPhase::Playing);
    assert!(player.state().is_playing);
    assert_eq!(player.state().current_time, 0.0);
    assert_eq!(
        player.backend().commands(),
        &[BackendCommand::SetPosition(0.0), BackendCommand::RequestPlay]
    );
}

#[test]
fn test_end_without_loop_stops_and_notifies() {
    let ended_titles = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&ended_titles);

    let mut player = playing(ENCHANTED, 240.0);
    player.set_on_ended(move |track| sink.borrow_mut().push(track.title.clone()));
    player.handle_event(ended(ENCHANTED));

    assert_eq!(player.phase(), PlayerPhase::Ready);
    assert!(!player.state().is_playing);
    assert_eq!(player.state().current_time, 0.0);
    assert_eq!(*ended_titles.borrow(), vec!["Song".to_string()]);
}

#[test]
fn test_loop_toggled_while_playing() {
    let mut player = playing(ENCHANTED, 240.0);
    player.set_loop(true);
    player.handle_event(ended(ENCHANTED));
    assert_eq!(player.phase(), PlayerPhase::Playing);
    assert!(player.current_track().unwrap().loop_playback);
}

fn looping_and_playing() -> AudioController<RecordingBackend> {
    let mut player = player();
    player
        .load_track(Track::looping("Enchanted", ENCHANTED))
        .unwrap();
    player.handle_event(metadata(ENCHANTED, 240.0));
    player.handle_event(can_play(ENCHANTED));
    player.handle_event(started(ENCHANTED));
    player.backend_mut().take_commands();
    player
}

fn paused(src: &str) -> MediaEvent {
    MediaEvent::Paused {
        src: src.to_string(),
    }
}

#[test]
fn test_loop_end_pause_never_reaches_ready() {
    let mut player = looping_and_playing();

    // A media element reports `pause` just before `ended`
    player.handle_event(paused(ENCHANTED));
    assert_eq!(player.phase(), PlayerPhase::Playing);
    assert!(player.state().is_playing);

    player.handle_event(ended(ENCHANTED));
    assert_eq!(player.phase(), PlayerPhase::Playing);
    assert_eq!(player.state().current_time, 0.0);
    assert_eq!(
        player.backend().commands(),
        &[BackendCommand::SetPosition(0.0), BackendCommand::RequestPlay]
    );
}

#[test]
fn test_user_pause_on_looping_track_is_honored() {
    let mut player = looping_and_playing();
    player.toggle_play();
    player.handle_event(paused(ENCHANTED));
    assert_eq!(player.phase(), PlayerPhase::Ready);
    assert!(!player.state().is_playing);
}

#[test]
fn test_pause_during_loop_restart_stays_silent() {
    let mut player = looping_and_playing();
    player.handle_event(ended(ENCHANTED));
    player.toggle_play();

    // The interrupted restart is rejected after the pause went out
    player.handle_event(MediaEvent::PlayRejected {
        src: ENCHANTED.to_string(),
        fault: MediaFault::Aborted,
    });
    assert_eq!(player.phase(), PlayerPhase::Ready);
    assert!(!player.state().is_playing);
    assert!(player.state().error.is_none());

    player.toggle_play();
    player.handle_event(started(ENCHANTED));
    assert_eq!(player.phase(), PlayerPhase::Playing);
}

// ============================================================================
// Seeking and volume
// ============================================================================

#[test]
fn test_seek_clamps() {
    let mut player = playing(ENCHANTED, 200.0);
    player.seek(500.0);
    assert_eq!(player.state().current_time, 200.0);
    player.seek(-3.0);
    assert_eq!(player.state().current_time, 0.0);
    player.seek(42.5);
    assert_eq!(player.state().current_time, 42.5);
}

#[test]
fn test_seek_before_metadata_is_noop() {
    let mut player = player();
    player.load_track(Track::new("Enchanted", ENCHANTED)).unwrap();
    player.backend_mut().take_commands();
    player.seek(10.0);
    assert_eq!(player.state().current_time, 0.0);
    assert!(player.backend().commands().is_empty());
}

#[test]
fn test_volume_clamped() {
    let mut player = player();
    assert_eq!(player.volume(), 0.7);
    player.set_volume(1.4);
    assert_eq!(player.volume(), 1.0);
    assert_eq!(
        player.backend().commands().last(),
        Some(&BackendCommand::SetVolume(1.0))
    );
}

// ============================================================================
// Selection flow
// ============================================================================

#[test]
fn test_selection_feeds_player() {
    let registry = SongRegistry::builtin();
    let mut now_playing = NowPlaying::new();
    let mut player = player();

    assert!(now_playing.select_title(&registry, "Daylight", false));
    let track = now_playing.current().cloned().unwrap();
    assert!(player.load_track(track).unwrap());
    assert_eq!(player.current_track().unwrap().title, "Daylight");
}

#[test]
fn test_unknown_title_does_nothing() {
    let registry = SongRegistry::builtin();
    let mut now_playing = NowPlaying::new();

    assert_eq!(registry.lookup("Shake It Off"), "");
    assert!(!now_playing.select_title(&registry, "Shake It Off", false));
    assert!(now_playing.current().is_none());
}
