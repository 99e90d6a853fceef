use super::error_code::{self, TokebiErrorCode};

/// Local key-value persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("persistent storage unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("storage I/O error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("storage file {path} is corrupt: {message}")]
    Corrupt { path: String, message: String },
}

impl TokebiErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
