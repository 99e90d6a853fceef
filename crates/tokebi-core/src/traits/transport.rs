use std::future::Future;

use crate::errors::TransportError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// One-shot JSON POST to the analytics service.
///
/// Implementations attach `Content-Type: application/json` and the raw API
/// key as the `Authorization` header. Any HTTP status is a successful
/// exchange at this layer; only failures to complete the exchange are
/// errors. No retries.
pub trait Transport: Send + Sync + 'static {
    fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}
