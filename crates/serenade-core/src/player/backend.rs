//! The seam between the controller and whatever actually plays audio.

/// Commands the controller sends to a media element.
///
/// Every command is fire-and-forget: results come back later as
/// [`MediaEvent`](super::MediaEvent)s, never as return values.
pub trait MediaBackend {
    /// Stop whatever is loaded and start loading `url`
    fn set_source(&mut self, url: &str);
    /// Detach the current source
    fn clear_source(&mut self);
    /// Ask the element to start playing
    fn request_play(&mut self);
    /// Pause playback
    fn pause(&mut self);
    /// Move the playback position
    fn set_position(&mut self, secs: f64);
    /// Set output volume in [0, 1]
    fn set_volume(&mut self, volume: f64);
}

/// A command as received by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    SetSource(String),
    ClearSource,
    RequestPlay,
    Pause,
    SetPosition(f64),
    SetVolume(f64),
}

/// In-memory backend that only records commands.
///
/// Used by tests and headless runs to drive the controller with scripted
/// events.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    commands: Vec<BackendCommand>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received so far
    pub fn commands(&self) -> &[BackendCommand] {
        &self.commands
    }

    /// Drain the recorded commands
    pub fn take_commands(&mut self) -> Vec<BackendCommand> {
        std::mem::take(&mut self.commands)
    }

    /// How many play requests were issued
    pub fn play_requests(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, BackendCommand::RequestPlay))
            .count()
    }
}

impl MediaBackend for RecordingBackend {
    fn set_source(&mut self, url: &str) {
        self.commands.push(BackendCommand::SetSource(url.to_string()));
    }

    fn clear_source(&mut self) {
        self.commands.push(BackendCommand::ClearSource);
    }

    fn request_play(&mut self) {
        self.commands.push(BackendCommand::RequestPlay);
    }

    fn pause(&mut self) {
        self.commands.push(BackendCommand::Pause);
    }

    fn set_position(&mut self, secs: f64) {
        self.commands.push(BackendCommand::SetPosition(secs));
    }

    fn set_volume(&mut self, volume: f64) {
        self.commands.push(BackendCommand::SetVolume(volume));
    }
}
