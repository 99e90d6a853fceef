//! Structured log events for key client operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.
//! The target is always `tokebi`, so [`super::default_filter`] governs them.

pub fn sdk_disabled(reason: &str) {
    tracing::info!(target: "tokebi", event = "sdk_disabled", reason = %reason, "tracking disabled");
}

/// The one fatal path: the operator must fix the configuration.
pub fn configuration_rejected(error: &str) {
    tracing::error!(
        target: "tokebi",
        event = "configuration_rejected",
        error = %error,
        "no valid API key set; analytics disabled until the key is configured"
    );
}

pub fn player_resolved(player_id: &str) {
    tracing::debug!(target: "tokebi", event = "player_resolved", player_id = %player_id, "player id resolved");
}

pub fn registration_succeeded(game_id: &str) {
    tracing::info!(
        target: "tokebi",
        event = "registration_succeeded",
        game_id = %game_id,
        "game registered"
    );
}

/// Registration failed; tracking continues under a locally minted id.
pub fn registration_degraded(reason: &str, fallback_game_id: &str) {
    tracing::warn!(
        target: "tokebi",
        event = "registration_degraded",
        reason = %reason,
        fallback_game_id = %fallback_game_id,
        "game registration failed, using fallback game id"
    );
}

pub fn event_tracked(event_type: &str, fields: usize) {
    tracing::debug!(
        target: "tokebi",
        event = "event_tracked",
        event_type = %event_type,
        fields = fields,
        "tracking event"
    );
}

/// A `track` call that did nothing: disabled, not yet registered, or
/// payload could not be built.
pub fn event_skipped(event_type: &str, reason: &str) {
    tracing::debug!(
        target: "tokebi",
        event = "event_skipped",
        event_type = %event_type,
        reason = %reason,
        "event not sent"
    );
}

pub fn event_delivered(event_type: &str) {
    tracing::debug!(target: "tokebi", event = "event_delivered", event_type = %event_type, "event sent");
}

pub fn event_rejected(event_type: &str, status: u16) {
    tracing::warn!(
        target: "tokebi",
        event = "event_rejected",
        event_type = %event_type,
        status = status,
        "analytics API rejected event"
    );
}

pub fn delivery_failed(event_type: &str, error: &str) {
    tracing::warn!(
        target: "tokebi",
        event = "delivery_failed",
        event_type = %event_type,
        error = %error,
        "network error sending event"
    );
}

pub fn session_ended(game_id: &str) {
    tracing::info!(target: "tokebi", event = "session_ended", game_id = %game_id, "session ended");
}
