//! Event emitter: gate check, flatten, attach identity, dispatch.
//!
//! `track` never returns an error and never panics on bad input; every
//! failure ends in a log line and a dropped event.

use serde::Serialize;
use tokebi_core::constants::{PLATFORM, TRACK_PATH};
use tokebi_core::errors::TransportError;
use tokebi_core::{EventRecord, Transport};
use tokebi_observability::delivery_span;
use tokebi_observability::tracing_setup::events;
use tokebi_payload::to_flat_payload;
use tracing::Instrument;

use crate::client::TokebiClient;

/// The only status the track endpoint answers on success.
const TRACK_SUCCESS_STATUS: u16 = 200;

impl<T: Transport> TokebiClient<T> {
    /// Track an event with a payload of any serializable shape.
    ///
    /// No-op unless tracking is enabled and registration has completed.
    pub fn track<P: Serialize + ?Sized>(&self, event_type: &str, payload: &P) {
        self.emit(event_type, payload);
    }

    /// Track an event with an empty payload.
    pub fn track_event(&self, event_type: &str) {
        self.track(event_type, &serde_json::Map::new());
    }

    /// `track` that reports whether a delivery task was spawned.
    pub(crate) fn emit<P: Serialize + ?Sized>(&self, event_type: &str, payload: &P) -> bool {
        match self.build_record(event_type, payload) {
            Some(record) => self.dispatch(record),
            None => false,
        }
    }

    /// Gate check plus record assembly. `None` means the event was dropped.
    pub fn build_record<P: Serialize + ?Sized>(
        &self,
        event_type: &str,
        payload: &P,
    ) -> Option<EventRecord> {
        if !self.is_enabled() {
            self.skip(event_type, "tracking disabled");
            return None;
        }
        let registration = self.registration();
        if !registration.is_initialized {
            self.skip(event_type, "not initialized");
            return None;
        }
        let Some(player_id) = self.player_id() else {
            self.skip(event_type, "no player id");
            return None;
        };

        let payload = match to_flat_payload(event_type, payload) {
            Ok(payload) => payload,
            Err(e) => {
                self.skip(event_type, &e.to_string());
                return None;
            }
        };

        Some(EventRecord {
            event_type: event_type.to_string(),
            payload,
            game_id: registration.game_id,
            player_id: player_id.to_string(),
            platform: PLATFORM.to_string(),
            environment: self.environment(),
        })
    }

    /// Hand a record to the transport on a task spawned on the runtime
    /// captured by `start`. Returns whether the task was spawned.
    fn dispatch(&self, record: EventRecord) -> bool {
        let event_type = record.event_type.clone();
        let body = match serde_json::to_value(&record) {
            Ok(body) => body,
            Err(e) => {
                self.skip(&event_type, &e.to_string());
                return false;
            }
        };
        self.log(|| events::event_tracked(&event_type, record.payload.len()));

        let metrics = &self.inner.metrics;
        metrics.record_dispatched();

        let Some(runtime) = self.runtime() else {
            metrics.record_failed();
            let err = TransportError::NoRuntime {
                path: TRACK_PATH.to_string(),
            };
            self.log(|| events::delivery_failed(&event_type, &err.to_string()));
            return false;
        };

        let client = self.clone();
        let span = delivery_span!(event_type);
        let task = runtime.spawn(
            async move {
                let inner = &client.inner;
                match inner.transport.post_json(TRACK_PATH, &body).await {
                    Ok(response) if response.status == TRACK_SUCCESS_STATUS => {
                        inner.metrics.record_delivered();
                        client.log(|| events::event_delivered(&event_type));
                    }
                    Ok(response) => {
                        inner.metrics.record_rejected();
                        client.log(|| events::event_rejected(&event_type, response.status));
                    }
                    Err(e) => {
                        inner.metrics.record_failed();
                        client.log(|| events::delivery_failed(&event_type, &e.to_string()));
                    }
                }
            }
            .instrument(span),
        );
        self.keep_task(task);
        true
    }

    fn skip(&self, event_type: &str, reason: &str) {
        self.inner.metrics.record_skipped();
        self.log(|| events::event_skipped(event_type, reason));
    }
}
