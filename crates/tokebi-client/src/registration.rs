//! Registration gate: the one-shot handshake that opens event emission.
//!
//! Success (200/201 with a `game_id`) opens the gate with the server id and
//! then emits `session_start`. Any other status, a transport failure, or no
//! runtime to run the handshake on opens the gate with a
//! `game_fallback_<millis>` id instead; registration never blocks tracking.

use tokebi_core::constants::{GAMES_PATH, SESSION_START_EVENT};
use tokebi_core::errors::{RegistrationError, TokebiError, TransportError};
use tokebi_core::{GameRegistration, Transport, TransportResponse};
use tokebi_observability::registration_span;
use tokebi_observability::tracing_setup::events;
use tokebi_transport::{RegistrationRequest, RegistrationResponse};
use tracing::Instrument;

use crate::client::TokebiClient;

/// Map the handshake's outcome to the server-assigned game id.
pub fn registration_outcome(
    result: Result<TransportResponse, TransportError>,
) -> Result<String, TokebiError> {
    let response = result?;
    match response.status {
        200 | 201 => Ok(RegistrationResponse::parse(&response.body)?.game_id),
        status => Err(RegistrationError::Rejected { status }.into()),
    }
}

/// Spawn the handshake. Called once, from `TokebiClient::start`.
pub(crate) fn spawn<T: Transport>(client: &TokebiClient<T>) {
    let Some(runtime) = client.runtime() else {
        let err = TransportError::NoRuntime {
            path: GAMES_PATH.to_string(),
        };
        open_with_fallback(client, &err.to_string());
        return;
    };

    let task_client = client.clone();
    let span = registration_span!(client.inner.settings.game_name);
    let task = runtime.spawn(async move { register(task_client).instrument(span).await });
    client.keep_task(task);
}

async fn register<T: Transport>(client: TokebiClient<T>) {
    let settings = &client.inner.settings;
    let request = RegistrationRequest::new(&settings.game_name, &settings.engine_version);
    let body = match serde_json::to_value(&request) {
        Ok(body) => body,
        Err(e) => {
            open_with_fallback(&client, &e.to_string());
            return;
        }
    };

    let result = client.inner.transport.post_json(GAMES_PATH, &body).await;
    match registration_outcome(result) {
        Ok(game_id) => {
            if open_gate(&client, game_id.clone()) {
                client.log(|| events::registration_succeeded(&game_id));
                // Dispatched only now, so it always carries the final id.
                client.track_event(SESSION_START_EVENT);
            }
        }
        Err(e) => open_with_fallback(&client, &e.to_string()),
    }
}

fn open_with_fallback<T: Transport>(client: &TokebiClient<T>, reason: &str) {
    let fallback = GameRegistration::fallback_game_id();
    if open_gate(client, fallback.clone()) {
        client.log(|| events::registration_degraded(reason, &fallback));
    }
}

/// Returns `false` if the gate was already open.
fn open_gate<T: Transport>(client: &TokebiClient<T>, game_id: String) -> bool {
    client
        .inner
        .registration
        .send_if_modified(|reg| reg.open(game_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_and_ok_both_register() {
        let ok = registration_outcome(Ok(TransportResponse::new(200, r#"{"game_id":"g1"}"#)));
        assert_eq!(ok.unwrap(), "g1");
        let created = registration_outcome(Ok(TransportResponse::new(201, r#"{"game_id":"g2"}"#)));
        assert_eq!(created.unwrap(), "g2");
    }

    #[test]
    fn other_statuses_are_rejections() {
        let err = registration_outcome(Ok(TransportResponse::new(204, ""))).unwrap_err();
        assert!(matches!(
            err,
            TokebiError::Registration(RegistrationError::Rejected { status: 204 })
        ));
    }

    #[test]
    fn success_without_game_id_is_malformed() {
        let err = registration_outcome(Ok(TransportResponse::new(200, "{}"))).unwrap_err();
        assert!(matches!(
            err,
            TokebiError::Registration(RegistrationError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn transport_failures_pass_through() {
        let err = registration_outcome(Err(TransportError::Network {
            reason: "dns".into(),
        }))
        .unwrap_err();
        assert!(matches!(err, TokebiError::Transport(_)));
    }
}
