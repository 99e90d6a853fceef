//! # tokebi-observability
//!
//! The client's local log sink: subscriber setup, one structured event per
//! notable occurrence, span helpers, and in-process delivery counters.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{DeliveryMetrics, DeliverySnapshot};
pub use tracing_setup::{default_filter, init_tracing, init_tracing_with_filter};
