use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for what happened to each `track` call. Lock-free; shared by
/// every clone of a client.
#[derive(Debug, Default)]
pub struct DeliveryMetrics {
    dispatched: AtomicU64,
    delivered: AtomicU64,
    rejected: AtomicU64,
    failed: AtomicU64,
    skipped: AtomicU64,
}

/// Point-in-time copy of [`DeliveryMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeliverySnapshot {
    /// Handed to the transport.
    pub dispatched: u64,
    /// Answered with the success status.
    pub delivered: u64,
    /// Answered with any other status.
    pub rejected: u64,
    /// No answer: network, timeout, or runtime failure.
    pub failed: u64,
    /// Dropped before dispatch.
    pub skipped: u64,
}

impl DeliveryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_dispatched(&self) {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> DeliverySnapshot {
        DeliverySnapshot {
            dispatched: self.dispatched.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
        }
    }
}

impl DeliverySnapshot {
    /// Dispatched requests that have not completed yet.
    pub fn in_flight(&self) -> u64 {
        self.dispatched
            .saturating_sub(self.delivered + self.rejected + self.failed)
    }
}
