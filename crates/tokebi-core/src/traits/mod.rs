pub mod key_value_store;
pub mod transport;

pub use key_value_store::KeyValueStore;
pub use transport::{Transport, TransportResponse};
