use super::error_code::{self, TokebiErrorCode};

/// Reasons the registration handshake fell back to a locally minted game id.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("registration rejected with HTTP {status}")]
    Rejected { status: u16 },

    #[error("registration response malformed: {reason}")]
    MalformedResponse { reason: String },
}

impl TokebiErrorCode for RegistrationError {
    fn error_code(&self) -> &'static str {
        error_code::REGISTRATION_ERROR
    }
}
