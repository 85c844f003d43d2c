//! Audio player controller.
//!
//! Owns the single current track and turns caller requests plus inbound
//! [`MediaEvent`]s into a [`PlaybackState`]. The controller never waits on the
//! backend: loads and play requests resolve later through `handle_event`.

use tracing::{debug, info, warn};

use super::backend::MediaBackend;
use super::events::{MediaEvent, PlayOrigin};
use super::state::{PlaybackState, PlayerPhase};
use crate::error::{CardResult, MediaFault};
use crate::types::Track;

/// Volume applied to every new controller.
pub const DEFAULT_VOLUME: f64 = 0.7;

type EndedCallback = Box<dyn FnMut(&Track)>;

/// Playback state machine driven by a [`MediaBackend`].
pub struct AudioController<B: MediaBackend> {
    backend: B,
    track: Option<Track>,
    state: PlaybackState,
    phase: PlayerPhase,
    loop_playback: bool,
    volume: f64,
    autoplay: bool,
    autoplay_attempted: bool,
    /// Single in-flight play request; blocks autoplay and user play alike
    pending_play: Option<PlayOrigin>,
    /// A pause went out from `pause()` and its `Paused` event has not arrived yet
    pause_requested: bool,
    /// The last error came from loading the source rather than from play()
    load_failed: bool,
    last_fault: Option<MediaFault>,
    on_ended: Option<EndedCallback>,
}

impl<B: MediaBackend> AudioController<B> {
    /// Create a controller with autoplay enabled
    pub fn new(mut backend: B) -> Self {
        backend.set_volume(DEFAULT_VOLUME);
        Self {
            backend,
            track: None,
            state: PlaybackState::default(),
            phase: PlayerPhase::Empty,
            loop_playback: false,
            volume: DEFAULT_VOLUME,
            autoplay: true,
            autoplay_attempted: false,
            pending_play: None,
            pause_requested: false,
            load_failed: false,
            last_fault: None,
            on_ended: None,
        }
    }

    /// Enable or disable the automatic play attempt once a track is ready
    pub fn with_autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = enabled;
        self
    }

    /// Callback invoked when a non-looping track plays to the end
    pub fn set_on_ended(&mut self, callback: impl FnMut(&Track) + 'static) {
        self.on_ended = Some(Box::new(callback));
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub fn is_looping(&self) -> bool {
        self.loop_playback
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Cause of the most recent failure, if the player is still affected by it
    pub fn last_fault(&self) -> Option<MediaFault> {
        self.last_fault
    }

    /// Whether a play request is waiting for the backend
    pub fn play_pending(&self) -> bool {
        self.pending_play.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Load `track`, replacing the current one.
    ///
    /// Returns `Ok(false)` without touching anything when `track` has the
    /// same url as the current track.
    pub fn load_track(&mut self, track: Track) -> CardResult<bool> {
        track.validate()?;

        if self
            .track
            .as_ref()
            .is_some_and(|current| current.url == track.url)
        {
            debug!(title = %track.title, "Track already loaded");
            return Ok(false);
        }

        if self.state.is_playing || self.pending_play.is_some() {
            self.backend.pause();
        }

        info!(title = %track.title, looping = track.loop_playback, "Loading track");
        self.state = PlaybackState::loading();
        self.phase = PlayerPhase::Loading;
        self.loop_playback = track.loop_playback;
        self.autoplay_attempted = false;
        self.pending_play = None;
        self.pause_requested = false;
        self.load_failed = false;
        self.last_fault = None;
        self.backend.set_source(&track.url);
        self.track = Some(track);
        Ok(true)
    }

    /// Drop the current track and return to `Empty`.
    pub fn clear(&mut self) {
        if self.track.take().is_none() {
            return;
        }
        debug!("Clearing current track");
        self.backend.pause();
        self.backend.clear_source();
        self.state = PlaybackState::default();
        self.phase = PlayerPhase::Empty;
        self.loop_playback = false;
        self.pending_play = None;
        self.pause_requested = false;
        self.load_failed = false;
        self.last_fault = None;
    }

    /// Pause when playing, otherwise ask to start playback.
    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// User-initiated play request.
    pub fn play(&mut self) {
        match self.phase {
            PlayerPhase::Empty => debug!("Play requested with nothing loaded"),
            PlayerPhase::Loading => debug!("Play requested while still loading"),
            PlayerPhase::Playing => {}
            PlayerPhase::Error if self.load_failed => self.reload(),
            PlayerPhase::Ready | PlayerPhase::Error => self.request_play(PlayOrigin::User),
        }
    }

    /// Pause playback. Never reports an error.
    pub fn pause(&mut self) {
        if self.track.is_none() {
            return;
        }
        self.backend.pause();
        self.pending_play = None;
        self.pause_requested = true;
        self.state.is_playing = false;
        if self.phase == PlayerPhase::Playing {
            self.phase = PlayerPhase::Ready;
        }
    }

    /// Move to `time` seconds, clamped into `[0, duration]`.
    ///
    /// Does nothing until the duration is known.
    pub fn seek(&mut self, time: f64) {
        if self.state.duration <= 0.0 || time.is_nan() {
            return;
        }
        let clamped = time.clamp(0.0, self.state.duration);
        self.backend.set_position(clamped);
        self.state.current_time = clamped;
    }

    /// Restart from the beginning instead of stopping at the end
    pub fn set_loop(&mut self, enabled: bool) {
        self.loop_playback = enabled;
        if let Some(track) = self.track.as_mut() {
            track.loop_playback = enabled;
        }
    }

    /// Set the output volume, clamped into `[0, 1]`
    pub fn set_volume(&mut self, volume: f64) {
        if volume.is_nan() {
            return;
        }
        self.volume = volume.clamp(0.0, 1.0);
        self.backend.set_volume(self.volume);
    }

    /// Apply a media lifecycle event.
    ///
    /// Events for any source other than the current track are stale and
    /// ignored. Returns whether the event was applied.
    pub fn handle_event(&mut self, event: MediaEvent) -> bool {
        let current_url = match self.track.as_ref() {
            Some(track) => track.url.as_str(),
            None => {
                debug!(%event, "Dropping media event with no track loaded");
                return false;
            }
        };
        if event.src() != current_url {
            debug!(%event, "Dropping stale media event");
            return false;
        }

        match event {
            MediaEvent::MetadataReady { duration, .. } => self.on_metadata(duration),
            MediaEvent::CanPlay { .. } => self.on_can_play(),
            MediaEvent::Progress { position, .. } => self.on_progress(position),
            MediaEvent::Ended { .. } => self.on_ended(),
            MediaEvent::Failed { fault, .. } => self.on_failed(fault),
            MediaEvent::PlayStarted { .. } => self.on_play_started(),
            MediaEvent::PlayRejected { fault, .. } => self.on_play_rejected(fault),
            MediaEvent::Paused { .. } => self.on_paused(),
        }
        true
    }

    fn request_play(&mut self, origin: PlayOrigin) {
        if let Some(pending) = self.pending_play {
            debug!(?origin, ?pending, "Play request already in flight");
            return;
        }
        debug!(?origin, "Requesting playback");
        self.pending_play = Some(origin);
        self.pause_requested = false;
        self.backend.request_play();
    }

    fn reload(&mut self) {
        let Some(track) = self.track.as_ref() else {
            return;
        };
        info!(title = %track.title, "Retrying failed track");
        self.state = PlaybackState::loading();
        self.phase = PlayerPhase::Loading;
        self.autoplay_attempted = false;
        self.load_failed = false;
        self.last_fault = None;
        self.backend.set_source(&track.url);
    }

    fn on_metadata(&mut self, duration: f64) {
        self.state.duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        self.state.is_loading = false;
        if self.state.duration > 0.0 {
            self.state.current_time = self.state.current_time.min(self.state.duration);
        }
        if self.phase == PlayerPhase::Loading {
            self.phase = PlayerPhase::Ready;
        }
    }

    fn on_can_play(&mut self) {
        self.state.is_loading = false;
        if self.phase == PlayerPhase::Loading {
            self.phase = PlayerPhase::Ready;
        }
        if self.autoplay && !self.autoplay_attempted && self.phase == PlayerPhase::Ready {
            self.autoplay_attempted = true;
            self.request_play(PlayOrigin::Autoplay);
        }
    }

    fn on_progress(&mut self, position: f64) {
        if !position.is_finite() {
            return;
        }
        let position = position.max(0.0);
        self.state.current_time = if self.state.duration > 0.0 {
            position.min(self.state.duration)
        } else {
            position
        };
    }

    fn on_ended(&mut self) {
        if self.loop_playback {
            debug!("Looping track from the start");
            self.state.current_time = 0.0;
            self.state.is_playing = true;
            self.state.is_loading = false;
            self.phase = PlayerPhase::Playing;
            self.backend.set_position(0.0);
            self.pending_play = None;
            self.request_play(PlayOrigin::Loop);
            return;
        }

        self.state.is_playing = false;
        self.state.current_time = 0.0;
        self.phase = PlayerPhase::Ready;
        self.pending_play = None;
        if let (Some(callback), Some(track)) = (self.on_ended.as_mut(), self.track.as_ref()) {
            callback(track);
        }
    }

    fn on_failed(&mut self, fault: MediaFault) {
        warn!(%fault, "Media failed to load");
        self.state.error = Some(fault.to_string());
        self.state.is_loading = false;
        self.state.is_playing = false;
        self.phase = PlayerPhase::Error;
        self.pending_play = None;
        self.load_failed = true;
        self.last_fault = Some(fault);
    }

    fn on_play_started(&mut self) {
        self.pending_play = None;
        self.state.is_playing = true;
        self.state.is_loading = false;
        self.state.error = None;
        self.phase = PlayerPhase::Playing;
        self.last_fault = None;
    }

    fn on_play_rejected(&mut self, fault: MediaFault) {
        // A pause or a new request already superseded this play() call
        let Some(origin) = self.pending_play.take() else {
            debug!(%fault, "Ignoring rejection of a superseded play request");
            return;
        };
        self.state.is_playing = false;
        self.state.error = Some(fault.to_string());
        self.last_fault = Some(fault);

        match origin {
            PlayOrigin::Autoplay => {
                // Wait for the listener to press play; the hint stays visible.
                info!(%fault, "Autoplay refused, waiting for user");
                if self.phase == PlayerPhase::Playing {
                    self.phase = PlayerPhase::Ready;
                }
            }
            PlayOrigin::User | PlayOrigin::Loop => {
                warn!(%fault, "Playback refused");
                self.phase = PlayerPhase::Error;
            }
        }
    }

    fn on_paused(&mut self) {
        let requested = std::mem::take(&mut self.pause_requested);
        if self.loop_playback && !requested {
            // The element pauses itself at the end of the track; `Ended` follows and restarts it
            debug!("Ignoring end-of-track pause on a looping track");
            return;
        }
        self.state.is_playing = false;
        if self.phase == PlayerPhase::Playing {
            self.phase = PlayerPhase::Ready;
        }
    }
}

impl<B: MediaBackend> std::fmt::Debug for AudioController<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioController")
            .field("track", &self.track)
            .field("phase", &self.phase)
            .field("state", &self.state)
            .field("loop_playback", &self.loop_playback)
            .field("pending_play", &self.pending_play)
            .finish()
    }
}
