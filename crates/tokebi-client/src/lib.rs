//! # tokebi-client
//!
//! Client-side analytics for games: assigns a durable player id, registers
//! the running game with the Tokebi service, and emits flattened events
//! over fire-and-forget HTTP. Nothing here can fail the host game except a
//! missing API key at startup.
//!
//! ```no_run
//! # async fn demo() -> tokebi_core::TokebiResult<()> {
//! use tokebi_client::{init_logging, LifecycleHooks, LifecycleSignal, TokebiClient};
//! use tokebi_core::TokebiConfig;
//! use tokebi_identity::JsonFileStore;
//!
//! let config = TokebiConfig::load(None)?;
//! init_logging(&config);
//! let store = JsonFileStore::new("save/tokebi.json");
//! let client = TokebiClient::start_http(&config, Some("Slime Quest"), Some(&store))?;
//! let hooks = LifecycleHooks::install(&client);
//!
//! client.track("level_up", &serde_json::json!({"level": 2, "party": ["Harold"]}));
//!
//! if let Some(hooks) = hooks {
//!     hooks.signal(LifecycleSignal::Unload).await;
//! }
//! client.flush().await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod emitter;
pub mod environment;
pub mod lifecycle;
pub mod registration;

pub use client::{init_logging, TokebiClient};
pub use environment::detect_environment;
pub use lifecycle::{LifecycleHooks, LifecycleSignal};
