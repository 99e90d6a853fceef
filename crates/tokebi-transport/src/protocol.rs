//! Wire bodies for `POST /api/games`. The track body is
//! [`tokebi_core::EventRecord`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tokebi_core::constants::{PLATFORM, REGISTRATION_PLAYER_COUNT};
use tokebi_core::errors::RegistrationError;

/// Registration handshake body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub game_name: String,
    pub platform: String,
    pub rpgmaker_version: String,
    pub player_count: u32,
}

impl RegistrationRequest {
    pub fn new(game_name: impl Into<String>, engine_version: impl Into<String>) -> Self {
        Self {
            game_name: game_name.into(),
            platform: PLATFORM.to_string(),
            rpgmaker_version: engine_version.into(),
            player_count: REGISTRATION_PLAYER_COUNT,
        }
    }
}

/// Registration success body. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationResponse {
    /// Numeric ids are kept in their decimal form.
    #[serde(deserialize_with = "string_or_number")]
    pub game_id: String,
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "game_id must be a string or number, got {other}"
        ))),
    }
}

impl RegistrationResponse {
    /// Parse a success body, requiring a non-empty `game_id`.
    pub fn parse(body: &str) -> Result<Self, RegistrationError> {
        let parsed: Self =
            serde_json::from_str(body).map_err(|e| RegistrationError::MalformedResponse {
                reason: e.to_string(),
            })?;
        if parsed.game_id.is_empty() {
            return Err(RegistrationError::MalformedResponse {
                reason: "empty game_id".to_string(),
            });
        }
        Ok(parsed)
    }
}
