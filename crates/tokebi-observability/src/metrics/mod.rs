//! In-process delivery counters.

pub mod delivery_metrics;

pub use delivery_metrics::{DeliveryMetrics, DeliverySnapshot};
