//! Video metadata - the descriptor embedded in the page markup

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Descriptor parsed once from the video source element's `data-meta`
/// attribute. Immutable for the session.
///
/// Fields missing from the JSON default to empty strings; consumers degrade
/// on empty values rather than failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoMetadata {
    pub id: String,
    pub video_source_url: String,
    pub video_code: String,
    pub video_thumbnail_url: String,
    pub video_closed_caption_track_url: String,
}

impl VideoMetadata {
    /// Decode the raw `data-meta` JSON
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::MetadataParse(e.to_string()))
    }

    /// Id of the player element this video renders into
    pub fn player_element_id(&self) -> String {
        format!("video-player-{}", self.id)
    }
}
