//! Embedded web player configuration
//!
//! On plain web the page hands playback to the globally-loaded player
//! library. This module models the options object its setup call receives;
//! field names follow the library's JS API.

use crate::metadata::VideoMetadata;
use serde::{Deserialize, Serialize};

/// Interval between polls for the player library global, in milliseconds.
/// The poll has no retry limit: if the library never loads, it runs for the
/// page lifetime.
pub const LIBRARY_POLL_INTERVAL_MS: u32 = 2;

/// A single caption track entry in the setup options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionTrack {
    pub file: String,
    pub label: String,
    pub kind: String,
    pub default: bool,
}

impl CaptionTrack {
    /// The single English, non-default captions entry the player is
    /// configured with
    pub fn english(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            label: "English".to_string(),
            kind: "captions".to_string(),
            default: false,
        }
    }
}

/// Options object passed to the player library's setup call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub file: String,
    pub mediaid: String,
    pub autostart: bool,
    pub image: String,
    #[serde(rename = "playbackRateControls")]
    pub playback_rate_controls: bool,
    pub tracks: Vec<CaptionTrack>,
}

impl PlayerSetup {
    /// Build the setup options for a video descriptor: autostart with rate
    /// controls and one non-default English caption track.
    pub fn from_metadata(metadata: &VideoMetadata) -> Self {
        Self {
            file: metadata.video_source_url.clone(),
            mediaid: metadata.video_code.clone(),
            autostart: true,
            image: metadata.video_thumbnail_url.clone(),
            playback_rate_controls: true,
            tracks: vec![CaptionTrack::english(
                metadata.video_closed_caption_track_url.clone(),
            )],
        }
    }
}
