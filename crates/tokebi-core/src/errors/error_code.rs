//! Stable error codes for hosts that surface errors outside Rust.

/// Every error enum implements this to provide a structured code string.
pub trait TokebiErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MISSING_API_KEY: &str = "MISSING_API_KEY";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
pub const NO_RUNTIME: &str = "NO_RUNTIME";
pub const PAYLOAD_ERROR: &str = "PAYLOAD_ERROR";
pub const REGISTRATION_ERROR: &str = "REGISTRATION_ERROR";
