//! Span definitions for the two network operations.

/// Create a registration span.
#[macro_export]
macro_rules! registration_span {
    ($game_name:expr) => {
        tracing::info_span!("tokebi.registration", game_name = %$game_name)
    };
}

/// Create a delivery span.
#[macro_export]
macro_rules! delivery_span {
    ($event_type:expr) => {
        tracing::debug_span!("tokebi.delivery", event_type = %$event_type)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const REGISTRATION: &str = "tokebi.registration";
    pub const DELIVERY: &str = "tokebi.delivery";
}
