use serde::{Deserialize, Serialize};

use super::{Environment, FlatMap};

/// Body of a `POST /api/track` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub event_type: String,
    /// Always flat; built by the payload flattener, never by callers.
    pub payload: FlatMap,
    pub game_id: String,
    pub player_id: String,
    pub platform: String,
    pub environment: Environment,
}
