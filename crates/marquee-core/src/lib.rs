//! Marquee Core - Video Playback Bootstrap Library
//!
//! This crate provides the platform-independent half of the page bootstrap:
//! - Platform classification (native iOS shell, native Android shell, web)
//! - Video metadata and resume-timecode parsing
//! - The outbound command / inbound signal protocol shared with native hosts
//! - Session state reflected into the page's play/pause controls
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Marquee Core                        │
//! ├─────────────────────────────────────────────────────────┤
//! │                                                         │
//! │  ┌────────────┐  ┌────────────┐  ┌──────────────┐      │
//! │  │  Platform  │  │  Metadata  │  │   Timecode   │      │
//! │  │ Classifier │  │   Reader   │  │    Parser    │      │
//! │  └─────┬──────┘  └─────┬──────┘  └──────┬───────┘      │
//! │        │               │                │              │
//! │        └───────────────┼────────────────┘              │
//! │                        │                               │
//! │                 ┌──────┴───────┐                       │
//! │                 │   Playback   │                       │
//! │                 │   Session    │                       │
//! │                 └──────┬───────┘                       │
//! │                        │                               │
//! │        ┌───────────────┴───────────────┐               │
//! │  ┌─────┴──────┐                 ┌──────┴──────┐        │
//! │  │  Outbound  │                 │   Inbound   │        │
//! │  │  Commands  │                 │   Signals   │        │
//! │  └────────────┘                 └─────────────┘        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The DOM, the host bridge globals, and the embedded player library live
//! behind adapters in `marquee-wasm`; everything here is plain Rust and runs
//! in unit tests on the host.

pub mod error;
pub mod metadata;
pub mod platform;
pub mod protocol;
pub mod timecode;
pub mod web_player;

pub use error::{Error, Result};
pub use metadata::VideoMetadata;
pub use platform::{HostEnvironment, Platform};
pub use protocol::{
    BridgeSender, ControlHighlight, HostSignal, InboundMessage, OutboundCommand, PlaybackSession,
};
pub use timecode::{resume_from_url, time_to_seconds, TimecodeValue};
pub use web_player::{CaptionTrack, PlayerSetup, LIBRARY_POLL_INTERVAL_MS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library with default configuration
pub fn init() {
    tracing::info!(version = VERSION, "Marquee Core initialized");
}
