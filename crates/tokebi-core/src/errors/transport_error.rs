use super::error_code::{self, TokebiErrorCode};

/// HTTP delivery errors. Non-2xx statuses are not errors at this layer;
/// they come back as a `TransportResponse` and are classified by the caller.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("request timed out: {reason}")]
    Timeout { reason: String },

    #[error("no async runtime available to dispatch {path}")]
    NoRuntime { path: String },

    #[error("could not build request for {path}: {reason}")]
    InvalidRequest { path: String, reason: String },
}

impl TokebiErrorCode for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoRuntime { .. } => error_code::NO_RUNTIME,
            _ => error_code::NETWORK_ERROR,
        }
    }
}
