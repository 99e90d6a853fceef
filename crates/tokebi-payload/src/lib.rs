//! # tokebi-payload
//!
//! Turns arbitrary nested game state into the flat key/value mapping the
//! track endpoint accepts.

pub mod flatten;

pub use flatten::{flatten, flatten_with_prefix, to_flat_payload};
