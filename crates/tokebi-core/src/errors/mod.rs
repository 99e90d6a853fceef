//! Error handling for Tokebi.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod payload_error;
pub mod registration_error;
pub mod storage_error;
pub mod transport_error;

pub use config_error::ConfigError;
pub use error_code::TokebiErrorCode;
pub use payload_error::PayloadError;
pub use registration_error::RegistrationError;
pub use storage_error::StorageError;
pub use transport_error::TransportError;

/// Top-level error for the Tokebi client.
#[derive(Debug, thiserror::Error)]
pub enum TokebiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

impl TokebiErrorCode for TokebiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Transport(e) => e.error_code(),
            Self::Payload(e) => e.error_code(),
            Self::Registration(e) => e.error_code(),
        }
    }
}

pub type TokebiResult<T> = Result<T, TokebiError>;
