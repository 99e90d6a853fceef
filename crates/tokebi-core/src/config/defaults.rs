// Single source of truth for all default values.

// --- Service ---
pub const DEFAULT_ENDPOINT: &str = "https://tokebi-api.vercel.app";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// --- Game ---
pub const DEFAULT_GAME_NAME: &str = "RPG Maker Game";
pub const DEFAULT_ENGINE_VERSION: &str = "MV";

// --- Switches ---
pub const DEFAULT_TRACKING_ENABLED: bool = true;
pub const DEFAULT_DEBUG_MODE: bool = true;

// --- Environment variables ---
pub const ENV_API_KEY: &str = "TOKEBI_API_KEY";
pub const ENV_GAME_NAME: &str = "TOKEBI_GAME_NAME";
pub const ENV_TRACKING_ENABLED: &str = "TOKEBI_TRACKING_ENABLED";
pub const ENV_DEBUG_MODE: &str = "TOKEBI_DEBUG_MODE";
pub const ENV_ENDPOINT: &str = "TOKEBI_ENDPOINT";

// --- Plugin parameter names ---
pub const PARAM_API_KEY: &str = "apiKey";
pub const PARAM_GAME_NAME: &str = "gameName";
pub const PARAM_TRACKING_ENABLED: &str = "trackingEnabled";
pub const PARAM_DEBUG_MODE: &str = "debugMode";
