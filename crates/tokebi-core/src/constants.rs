/// Client library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Platform tag attached to every registration and event body.
pub const PLATFORM: &str = "rpgmaker-mv";

/// Registration endpoint path, relative to the configured endpoint.
pub const GAMES_PATH: &str = "/api/games";

/// Event ingestion endpoint path, relative to the configured endpoint.
pub const TRACK_PATH: &str = "/api/track";

/// Key under which the player identifier is persisted.
pub const PLAYER_ID_STORAGE_KEY: &str = "tokebi_player_id";

/// Prefix of a locally generated player identifier.
pub const PLAYER_ID_PREFIX: &str = "player_";

/// Upper bound (exclusive) of the random suffix in a generated player id.
pub const PLAYER_ID_RANDOM_BOUND: u32 = 10_000;

/// Prefix of the placeholder game id used before registration completes.
pub const TEMP_GAME_ID_PREFIX: &str = "game_temp_";

/// Prefix of the game id minted locally when registration fails.
pub const FALLBACK_GAME_ID_PREFIX: &str = "game_fallback_";

/// API key shipped in sample configs. Treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "test_key_123";

/// Player count reported at registration.
pub const REGISTRATION_PLAYER_COUNT: u32 = 1;

/// Lifecycle event names emitted by the client itself.
pub const SESSION_START_EVENT: &str = "session_start";
pub const SESSION_END_EVENT: &str = "session_end";
