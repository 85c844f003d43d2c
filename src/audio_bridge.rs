//! Webview audio backend.
//!
//! Playback runs in the webview's own `Audio` element. A single long-lived
//! script owns the element. [`WebviewAudio`] queues commands for the
//! [`AudioBridge`] task, which forwards them over the eval channel and hands
//! back media lifecycle events tagged with the url of the element that fired
//! them.
//!
//! ```text
//! AudioController ──cmd──► WebviewAudio ──mpsc──► AudioBridge ──eval──► <audio>
//!        ▲                                            │
//!        └──── handle_event ◄──── BridgeEvent ◄───────┘
//! ```

use dioxus::document::{self, Eval};
use serde::{Deserialize, Serialize};
use serenade_core::{MediaBackend, MediaEvent, MediaFault};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, trace, warn};

/// Script run once per window. Every `source` command replaces the element so
/// events from an abandoned source still carry that source's url.
const BRIDGE_SCRIPT: &str = r#"
const SILENT_WAV = "data:audio/wav;base64,UklGRigAAABXQVZFZm10IBAAAAABAAEAQB8AAEAfAAABAAgAZGF0YQAAAAA=";
let audio = null;
let volume = 1.0;

function attach(src) {
    const el = new Audio();
    el.preload = "auto";
    el.volume = volume;
    el.addEventListener("loadedmetadata", () =>
        dioxus.send({ kind: "metadata", src, duration: isFinite(el.duration) ? el.duration : 0 }));
    el.addEventListener("canplaythrough", () => dioxus.send({ kind: "can_play", src }));
    el.addEventListener("timeupdate", () =>
        dioxus.send({ kind: "progress", src, position: el.currentTime }));
    el.addEventListener("ended", () => dioxus.send({ kind: "ended", src }));
    el.addEventListener("pause", () => dioxus.send({ kind: "paused", src }));
    el.addEventListener("error", () =>
        dioxus.send({ kind: "failed", src, code: el.error ? el.error.code : 0 }));
    el.src = src;
    el.load();
    return { el, src };
}

function detach() {
    if (audio) {
        audio.el.pause();
        audio.el.removeAttribute("src");
        audio.el.load();
        audio = null;
    }
}

while (true) {
    const msg = await dioxus.recv();
    switch (msg.cmd) {
        case "source":
            detach();
            audio = attach(msg.url);
            break;
        case "clear":
            detach();
            break;
        case "play":
            if (audio) {
                const { el, src } = audio;
                el.play()
                    .then(() => dioxus.send({ kind: "play_started", src }))
                    .catch((e) => dioxus.send({ kind: "play_rejected", src, name: e.name || "" }));
            }
            break;
        case "pause":
            if (audio) audio.el.pause();
            break;
        case "seek":
            if (audio) audio.el.currentTime = msg.secs;
            break;
        case "volume":
            volume = msg.level;
            if (audio) audio.el.volume = volume;
            break;
        case "unlock": {
            const silent = new Audio(SILENT_WAV);
            silent.volume = 0;
            silent.play().then(() => silent.pause()).catch(() => {});
            break;
        }
    }
}
"#;

#[derive(Debug, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum BridgeCommand {
    Source { url: String },
    Clear,
    Play,
    Pause,
    Seek { secs: f64 },
    Volume { level: f64 },
    Unlock,
}

/// Event as reported by the bridge script.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeEvent {
    Metadata {
        src: String,
        #[serde(default)]
        duration: Option<f64>,
    },
    CanPlay {
        src: String,
    },
    Progress {
        src: String,
        position: f64,
    },
    Ended {
        src: String,
    },
    Failed {
        src: String,
        #[serde(default)]
        code: u16,
    },
    PlayStarted {
        src: String,
    },
    PlayRejected {
        src: String,
        #[serde(default)]
        name: String,
    },
    Paused {
        src: String,
    },
}

impl BridgeEvent {
    /// Decode one message from the bridge script
    pub fn parse(raw: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(raw)
    }
}

impl From<BridgeEvent> for MediaEvent {
    fn from(event: BridgeEvent) -> Self {
        match event {
            BridgeEvent::Metadata { src, duration } => MediaEvent::MetadataReady {
                src,
                duration: duration.unwrap_or(0.0),
            },
            BridgeEvent::CanPlay { src } => MediaEvent::CanPlay { src },
            BridgeEvent::Progress { src, position } => MediaEvent::Progress { src, position },
            BridgeEvent::Ended { src } => MediaEvent::Ended { src },
            BridgeEvent::Failed { src, code } => MediaEvent::Failed {
                src,
                fault: MediaFault::from_media_error_code(code),
            },
            BridgeEvent::PlayStarted { src } => MediaEvent::PlayStarted { src },
            BridgeEvent::PlayRejected { src, name } => MediaEvent::PlayRejected {
                src,
                fault: MediaFault::from_rejection_name(&name),
            },
            BridgeEvent::Paused { src } => MediaEvent::Paused { src },
        }
    }
}

/// [`MediaBackend`] backed by the webview's audio element.
#[derive(Clone)]
pub struct WebviewAudio {
    commands: UnboundedSender<BridgeCommand>,
}

/// The task side of the bridge: owns the eval channel.
pub struct AudioBridge {
    eval: Eval,
    commands: UnboundedReceiver<BridgeCommand>,
}

impl WebviewAudio {
    /// Start the bridge script. Must be called from inside a component.
    ///
    /// Nothing reaches the webview until [`AudioBridge::run`] is spawned.
    pub fn start() -> (Self, AudioBridge) {
        let (tx, rx) = mpsc::unbounded_channel();
        let bridge = AudioBridge {
            eval: document::eval(BRIDGE_SCRIPT),
            commands: rx,
        };
        (Self { commands: tx }, bridge)
    }

    /// Play a silent clip from a user gesture so later playback is allowed
    pub fn unlock(&self) {
        self.send(BridgeCommand::Unlock);
    }

    fn send(&self, command: BridgeCommand) {
        trace!(?command, "Queueing audio command");
        if let Err(e) = self.commands.send(command) {
            warn!(command = ?e.0, "Audio bridge is gone, dropping command");
        }
    }
}

impl AudioBridge {
    /// Forward commands to the script and events to `on_event` until the
    /// script or every [`WebviewAudio`] handle goes away.
    ///
    /// A message that does not decode is logged and skipped.
    pub async fn run(self, mut on_event: impl FnMut(BridgeEvent)) {
        let AudioBridge {
            mut eval,
            mut commands,
        } = self;
        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    if let Err(e) = eval.send(&command) {
                        warn!(?command, error = ?e, "Audio bridge command failed");
                    }
                }
                raw = eval.recv::<serde_json::Value>() => {
                    let raw = match raw {
                        Ok(raw) => raw,
                        Err(e) => {
                            error!("Audio bridge closed: {:?}", e);
                            break;
                        }
                    };
                    match BridgeEvent::parse(raw) {
                        Ok(event) => on_event(event),
                        Err(e) => warn!("Skipping unreadable audio event: {}", e),
                    }
                }
            }
        }
    }
}

impl MediaBackend for WebviewAudio {
    fn set_source(&mut self, url: &str) {
        self.send(BridgeCommand::Source {
            url: url.to_string(),
        });
    }

    fn clear_source(&mut self) {
        self.send(BridgeCommand::Clear);
    }

    fn request_play(&mut self) {
        self.send(BridgeCommand::Play);
    }

    fn pause(&mut self) {
        self.send(BridgeCommand::Pause);
    }

    fn set_position(&mut self, secs: f64) {
        self.send(BridgeCommand::Seek { secs });
    }

    fn set_volume(&mut self, volume: f64) {
        self.send(BridgeCommand::Volume { level: volume });
    }
}
