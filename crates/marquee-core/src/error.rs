//! Error types for Marquee Core

use thiserror::Error;

/// Result type alias for bootstrap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Playback bootstrap error types
///
/// Nothing here is fatal: metadata failures degrade initialization, message
/// failures discard one mutation, and delivery failures are logged by the
/// adapter and never retried.
#[derive(Error, Debug)]
pub enum Error {
    // Metadata errors
    #[error("Video metadata attribute is missing")]
    MetadataMissing,

    #[error("Failed to parse video metadata: {0}")]
    MetadataParse(String),

    // Inbound protocol errors
    #[error("Failed to parse host message: {0}")]
    MessageParse(String),

    // Outbound protocol errors
    #[error("Failed to encode bridge command: {0}")]
    CommandEncode(String),

    #[error("Failed to deliver bridge command: {0}")]
    BridgeDelivery(String),

    // Page contract errors
    #[error("Element not found: #{id}")]
    ElementNotFound { id: String },
}

impl Error {
    /// Returns the error code for diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::MetadataMissing => "METADATA_MISSING",
            Error::MetadataParse(_) => "METADATA_PARSE",
            Error::MessageParse(_) => "MESSAGE_PARSE",
            Error::CommandEncode(_) => "COMMAND_ENCODE",
            Error::BridgeDelivery(_) => "BRIDGE_DELIVERY",
            Error::ElementNotFound { .. } => "ELEMENT_NOT_FOUND",
        }
    }
}
