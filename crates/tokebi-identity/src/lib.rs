//! # tokebi-identity
//!
//! Resolves the durable per-device player id, creating and persisting one
//! on first run. Never fails: with no usable storage the id is ephemeral.

pub mod backends;
pub mod store;

pub use backends::{JsonFileStore, MemoryStore};
pub use store::{generate_player_id, resolve_or_create_player_id};
