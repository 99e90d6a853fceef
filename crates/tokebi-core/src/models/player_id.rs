use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::PLAYER_ID_PREFIX;

/// Durable per-device player identifier.
///
/// Opaque to everything but the identity store. Generated ids look like
/// `player_<unix_seconds>_<0..9999>`; ids read back from storage are kept
/// verbatim whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id has the shape of a locally generated one.
    pub fn is_generated(&self) -> bool {
        self.0.starts_with(PLAYER_ID_PREFIX)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}
