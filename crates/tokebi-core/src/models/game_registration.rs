use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::{FALLBACK_GAME_ID_PREFIX, TEMP_GAME_ID_PREFIX};

/// Registration state of the running game instance.
///
/// Starts with a `game_temp_<millis>` placeholder and `is_initialized ==
/// false`. [`GameRegistration::open`] moves it, exactly once, to the
/// server-assigned or fallback id with `is_initialized == true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRegistration {
    pub game_id: String,
    pub is_initialized: bool,
}

impl GameRegistration {
    /// State before the handshake has completed.
    pub fn pending() -> Self {
        Self {
            game_id: format!("{TEMP_GAME_ID_PREFIX}{}", Utc::now().timestamp_millis()),
            is_initialized: false,
        }
    }

    /// Mint a fallback game id for a failed handshake.
    pub fn fallback_game_id() -> String {
        format!("{FALLBACK_GAME_ID_PREFIX}{}", Utc::now().timestamp_millis())
    }

    /// Open the gate with the final game id.
    ///
    /// Returns `false` and leaves the state untouched if the gate is
    /// already open; initialization never reverts or re-assigns.
    pub fn open(&mut self, game_id: String) -> bool {
        if self.is_initialized {
            return false;
        }
        self.game_id = game_id;
        self.is_initialized = true;
        true
    }

    /// Whether the id was minted locally after a failed handshake.
    pub fn is_fallback(&self) -> bool {
        self.game_id.starts_with(FALLBACK_GAME_ID_PREFIX)
    }
}

impl Default for GameRegistration {
    fn default() -> Self {
        Self::pending()
    }
}
