//! In-process transport that records requests and answers from a script.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::{Arc, Mutex};

use tokebi_core::constants::GAMES_PATH;
use tokebi_core::errors::TransportError;
use tokebi_core::{Transport, TransportResponse};
use tokio::sync::watch;

/// Scripted outcome of one request.
#[derive(Debug, Clone)]
pub enum Scripted {
    Respond { status: u16, body: String },
    NetworkError,
}

impl Scripted {
    pub fn status(status: u16) -> Self {
        Self::Respond {
            status,
            body: String::new(),
        }
    }

    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::Respond {
            status,
            body: body.to_string(),
        }
    }
}

/// A request as the client handed it to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub path: String,
    pub body: serde_json::Value,
}

impl RecordedRequest {
    pub fn event_type(&self) -> Option<&str> {
        self.body.get("eventType").and_then(|v| v.as_str())
    }
}

#[derive(Debug)]
struct Inner {
    requests: Mutex<Vec<RecordedRequest>>,
    script: Mutex<HashMap<String, VecDeque<Scripted>>>,
    registration_open: watch::Sender<bool>,
}

/// Cloneable handle; clones share the same log and script.
///
/// Unscripted requests answer `200` with `{}`, except the registration
/// path which answers `201` with a fixed `game_id`.
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    inner: Arc<Inner>,
}

pub const RECORDED_GAME_ID: &str = "game_recorded";

impl RecordingTransport {
    pub fn new() -> Self {
        Self::with_registration_open(true)
    }

    /// Registration requests block until [`RecordingTransport::release_registration`].
    pub fn holding_registration() -> Self {
        Self::with_registration_open(false)
    }

    fn with_registration_open(open: bool) -> Self {
        let (registration_open, _) = watch::channel(open);
        Self {
            inner: Arc::new(Inner {
                requests: Mutex::new(Vec::new()),
                script: Mutex::new(HashMap::new()),
                registration_open,
            }),
        }
    }

    /// Queue an outcome for the next request to `path`.
    pub fn script(&self, path: &str, outcome: Scripted) -> &Self {
        self.inner
            .script
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(outcome);
        self
    }

    pub fn release_registration(&self) {
        self.inner.registration_open.send_replace(true);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    /// Event types sent to the track endpoint, in dispatch order.
    pub fn event_types(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|r| r.event_type().map(str::to_string))
            .collect()
    }

    fn next_outcome(&self, path: &str) -> Scripted {
        let scripted = self
            .inner
            .script
            .lock()
            .unwrap()
            .get_mut(path)
            .and_then(VecDeque::pop_front);
        scripted.unwrap_or_else(|| {
            if path == GAMES_PATH {
                Scripted::json(201, serde_json::json!({ "game_id": RECORDED_GAME_ID }))
            } else {
                Scripted::json(200, serde_json::json!({}))
            }
        })
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for RecordingTransport {
    fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        let path = path.to_string();
        let body = body.clone();
        let inner = Arc::clone(&self.inner);
        let outcome = self.next_outcome(&path);

        async move {
            if path == GAMES_PATH {
                let mut open = inner.registration_open.subscribe();
                // The sender lives in `inner`, so this only ends when released.
                let _ = open.wait_for(|open| *open).await;
            }
            inner.requests.lock().unwrap().push(RecordedRequest {
                path: path.clone(),
                body,
            });
            match outcome {
                Scripted::Respond { status, body } => Ok(TransportResponse::new(status, body)),
                Scripted::NetworkError => Err(TransportError::Network {
                    reason: format!("scripted network failure on {path}"),
                }),
            }
        }
    }
}
