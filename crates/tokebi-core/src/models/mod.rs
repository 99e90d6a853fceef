pub mod environment;
pub mod event_record;
pub mod game_registration;
pub mod player_id;

pub use environment::Environment;
pub use event_record::EventRecord;
pub use game_registration::GameRegistration;
pub use player_id::PlayerId;

/// A single-level mapping of string keys to scalar JSON values.
///
/// Ordered by insertion (`serde_json` is built with `preserve_order`), so
/// the wire body keeps the caller's field order.
pub type FlatMap = serde_json::Map<String, serde_json::Value>;
