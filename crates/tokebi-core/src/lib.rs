//! # tokebi-core
//!
//! Foundation crate for the Tokebi analytics client.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TokebiConfig;
pub use errors::{TokebiError, TokebiResult};
pub use models::{Environment, EventRecord, FlatMap, GameRegistration, PlayerId};
pub use traits::{KeyValueStore, Transport, TransportResponse};
