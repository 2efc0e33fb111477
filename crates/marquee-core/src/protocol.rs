//! Playback protocol - the two-channel contract with the native host
//!
//! Outbound: fire-and-forget `play` commands posted through a host bridge.
//! Inbound: status messages the host writes back into the page, surfaced
//! here as typed signals. There is no acknowledgment or ordering guarantee
//! between the two directions; the host is the source of truth for actual
//! playback state.

use crate::error::{Error, Result};
use crate::metadata::VideoMetadata;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Command posted to the native host. Constructed fresh per send, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundCommand {
    pub action: String,
    pub url: String,
    pub seconds: String,
}

impl OutboundCommand {
    /// A `play` command for the given source URL and start offset
    pub fn play(url: impl Into<String>, seconds: impl Into<String>) -> Self {
        Self {
            action: "play".to_string(),
            url: url.into(),
            seconds: seconds.into(),
        }
    }

    /// Serialize for string-accepting bridges
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::CommandEncode(e.to_string()))
    }
}

/// Raw status message the host writes into the message attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    pub action: String,
    #[serde(rename = "currentTime", skip_serializing_if = "Option::is_none", default)]
    pub current_time: Option<String>,
}

impl InboundMessage {
    /// Decode a raw message payload
    pub fn decode(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::MessageParse(e.to_string()))
    }

    /// Lift the loose wire shape into a typed signal
    pub fn signal(&self) -> HostSignal {
        match self.action.as_str() {
            "pause" => HostSignal::Pause,
            "tick" => HostSignal::Tick {
                current_time: self.current_time.clone().unwrap_or_default(),
            },
            other => HostSignal::Unknown(other.to_string()),
        }
    }
}

/// Typed inbound signal from the native host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSignal {
    /// Host paused its player
    Pause,
    /// Periodic position report
    Tick { current_time: String },
    /// Any other action; ignored
    Unknown(String),
}

/// Which of the two page control buttons carries the `active` class.
///
/// The two are mutually exclusive. Careful with the pairing: a host `pause`
/// signal activates the *play* button, while a user focus request activates
/// the *pause* button. The page markup relies on exactly this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlHighlight {
    /// `pause-butt` active, `play-butt` inactive
    Pause,
    /// `play-butt` active, `pause-butt` inactive
    Play,
}

/// Session-lifetime playback state.
///
/// One instance per page load, owned by the initializer and shared by
/// reference with the click handler and the inbound-message handler. The
/// only mutable field is the host-reported current time; there is no
/// explicit teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSession {
    current_time: String,
}

impl PlaybackSession {
    /// Start a session at the given offset (the parsed resume time)
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current_time: start.into(),
        }
    }

    /// Last position reported by the host, as received
    pub fn current_time(&self) -> &str {
        &self.current_time
    }

    /// Apply one inbound signal, returning the control highlight to reflect
    /// onto the page, if any.
    ///
    /// `Pause` changes the highlight without touching the session time;
    /// `Tick` records the reported time without touching the highlight.
    pub fn apply(&mut self, signal: HostSignal) -> Option<ControlHighlight> {
        match signal {
            HostSignal::Pause => Some(ControlHighlight::Play),
            HostSignal::Tick { current_time } => {
                self.current_time = current_time;
                None
            }
            HostSignal::Unknown(action) => {
                debug!(action = %action, "Ignoring unrecognized host action");
                None
            }
        }
    }

    /// Command sent when the user clicks the player surface: play from the
    /// last host-reported position. Pairs with `ControlHighlight::Pause` on
    /// the page controls.
    pub fn focus_command(&self, metadata: &VideoMetadata) -> OutboundCommand {
        OutboundCommand::play(metadata.video_source_url.clone(), self.current_time.clone())
    }
}

/// One-way outbound command channel into the native host.
///
/// Implementations deliver best-effort: a failed send is logged by the
/// caller and never retried or surfaced to the page.
pub trait BridgeSender {
    /// Post one command to the host
    fn send(&self, command: &OutboundCommand) -> Result<()>;
}
