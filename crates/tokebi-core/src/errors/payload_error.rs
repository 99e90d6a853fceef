use super::error_code::{self, TokebiErrorCode};

/// Errors turning a caller's payload into a flat event body.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("payload for {event_type} could not be serialized: {reason}")]
    Serialization { event_type: String, reason: String },
}

impl TokebiErrorCode for PayloadError {
    fn error_code(&self) -> &'static str {
        error_code::PAYLOAD_ERROR
    }
}
