//! Identity store: read-or-create over a [`KeyValueStore`].

use chrono::Utc;
use rand::Rng;
use tokebi_core::constants::{PLAYER_ID_PREFIX, PLAYER_ID_RANDOM_BOUND, PLAYER_ID_STORAGE_KEY};
use tokebi_core::{KeyValueStore, PlayerId};

/// Synthesize `player_<unix_seconds>_<0..9999>`.
pub fn generate_player_id() -> PlayerId {
    let seconds = Utc::now().timestamp();
    let random = rand::thread_rng().gen_range(0..PLAYER_ID_RANDOM_BOUND);
    PlayerId::new(format!("{PLAYER_ID_PREFIX}{seconds}_{random}"))
}

/// Return the persisted player id, or create and persist a new one.
///
/// `None` means the host has no persistence at all. Storage errors on read
/// are treated as "absent" and errors on write leave the new id unsaved
/// for this run; neither reaches the caller.
pub fn resolve_or_create_player_id(store: Option<&dyn KeyValueStore>) -> PlayerId {
    let Some(store) = store else {
        let id = generate_player_id();
        tracing::debug!(player_id = %id, "identity: no persistent storage, using ephemeral id");
        return id;
    };

    match store.get(PLAYER_ID_STORAGE_KEY) {
        Ok(Some(existing)) if !existing.is_empty() => return PlayerId::new(existing),
        Ok(_) => {}
        Err(e) => tracing::debug!("identity: could not read stored player id: {e}"),
    }

    let id = generate_player_id();
    if let Err(e) = store.set(PLAYER_ID_STORAGE_KEY, id.as_str()) {
        tracing::debug!(player_id = %id, "identity: player id not persisted: {e}");
    }
    id
}
