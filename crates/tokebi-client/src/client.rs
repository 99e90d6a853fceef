//! TokebiClient, the explicitly constructed analytics handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokebi_core::errors::TokebiResult;
use tokebi_core::{Environment, GameRegistration, KeyValueStore, PlayerId, TokebiConfig, Transport};
use tokebi_identity::{resolve_or_create_player_id, JsonFileStore};
use tokebi_observability::tracing_setup::events;
use tokebi_observability::{default_filter, init_tracing_with_filter};
use tokebi_observability::{DeliveryMetrics, DeliverySnapshot};
use tokebi_transport::{HttpTransport, HttpTransportConfig};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::environment::detect_environment;
use crate::registration;

/// Install the JSON log subscriber with the filter matching
/// `config.debug_mode`. A no-op if the host already set one.
pub fn init_logging(config: &TokebiConfig) {
    init_tracing_with_filter(default_filter(config.debug_mode));
}

/// Values fixed at startup.
#[derive(Debug, Clone)]
pub(crate) struct ClientSettings {
    pub(crate) tracking_enabled: bool,
    /// Gates every diagnostic log line except the startup key check.
    pub(crate) debug_mode: bool,
    pub(crate) game_name: String,
    pub(crate) engine_version: String,
    pub(crate) environment: Environment,
}

pub(crate) struct ClientInner<T> {
    pub(crate) transport: T,
    pub(crate) settings: ClientSettings,
    pub(crate) player_id: Option<PlayerId>,
    /// Opened exactly once by the registration task.
    pub(crate) registration: watch::Sender<GameRegistration>,
    pub(crate) session_ended: AtomicBool,
    /// Registration and delivery tasks not yet awaited by `flush`.
    pub(crate) tasks: Mutex<Vec<JoinHandle<()>>>,
    pub(crate) metrics: DeliveryMetrics,
    /// Runtime seen by `start`; every task is spawned here, whichever
    /// thread calls in later.
    pub(crate) runtime: Option<Handle>,
}

/// Cheap-to-clone handle to one analytics session.
///
/// All clones share the registration gate, the session-end latch, and the
/// in-flight task list.
pub struct TokebiClient<T> {
    pub(crate) inner: Arc<ClientInner<T>>,
}

impl<T> Clone for TokebiClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> TokebiClient<T> {
    /// Start the client.
    ///
    /// A missing or placeholder API key is the only error. With tracking
    /// disabled the returned client never touches storage or the network.
    /// Otherwise the player id is resolved and the registration handshake
    /// is spawned; this returns before it completes.
    ///
    /// Without a `store`, a configured `storage_path` backs the player id
    /// with a [`JsonFileStore`]. The Tokio runtime current at this call is
    /// kept and used for all later deliveries.
    pub fn start(
        config: &TokebiConfig,
        host_title: Option<&str>,
        transport: T,
        store: Option<&dyn KeyValueStore>,
    ) -> TokebiResult<Self> {
        if let Err(e) = config.validate_api_key() {
            events::configuration_rejected(&e.to_string());
            return Err(e.into());
        }

        let settings = ClientSettings {
            tracking_enabled: config.tracking_enabled,
            debug_mode: config.debug_mode,
            game_name: config.effective_game_name(host_title),
            engine_version: config.engine_version.clone(),
            environment: config
                .environment
                .unwrap_or_else(|| detect_environment(config.page_url.as_deref())),
        };

        if !settings.tracking_enabled {
            let client = Self::from_parts(transport, settings, None);
            client.log(|| events::sdk_disabled("tracking_enabled is false"));
            return Ok(client);
        }

        let file_store = match (store, config.storage_path.as_deref()) {
            (None, Some(path)) => Some(JsonFileStore::new(path)),
            _ => None,
        };
        let store = store.or(file_store.as_ref().map(|s| s as &dyn KeyValueStore));
        let player_id = resolve_or_create_player_id(store);

        let client = Self::from_parts(transport, settings, Some(player_id));
        client.log(|| events::player_resolved(client.player_id().map_or("", PlayerId::as_str)));
        registration::spawn(&client);
        Ok(client)
    }

    fn from_parts(transport: T, settings: ClientSettings, player_id: Option<PlayerId>) -> Self {
        let (registration, _) = watch::channel(GameRegistration::pending());
        Self {
            inner: Arc::new(ClientInner {
                transport,
                settings,
                player_id,
                registration,
                session_ended: AtomicBool::new(false),
                tasks: Mutex::new(Vec::new()),
                metrics: DeliveryMetrics::new(),
                runtime: Handle::try_current().ok(),
            }),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.settings.tracking_enabled
    }

    /// `None` when tracking is disabled.
    pub fn player_id(&self) -> Option<&PlayerId> {
        self.inner.player_id.as_ref()
    }

    /// Current game id: the placeholder until registration completes.
    pub fn game_id(&self) -> String {
        self.inner.registration.borrow().game_id.clone()
    }

    pub fn registration(&self) -> GameRegistration {
        self.inner.registration.borrow().clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.registration.borrow().is_initialized
    }

    pub fn is_session_ended(&self) -> bool {
        self.inner.session_ended.load(Ordering::Acquire)
    }

    pub fn environment(&self) -> Environment {
        self.inner.settings.environment
    }

    pub fn game_name(&self) -> &str {
        &self.inner.settings.game_name
    }

    pub fn metrics(&self) -> DeliverySnapshot {
        self.inner.metrics.snapshot()
    }

    /// Wait for the registration gate to open. Returns `false` at once for
    /// a disabled client, whose gate never opens.
    pub async fn wait_until_initialized(&self) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let mut rx = self.inner.registration.subscribe();
        // The sender lives in `inner`, which `self` keeps alive.
        let initialized = rx.wait_for(|reg| reg.is_initialized).await.is_ok();
        initialized
    }

    /// Await every registration and delivery task dispatched so far,
    /// including ones they spawn. Nothing is retried.
    pub async fn flush(&self) {
        loop {
            let pending = match self.inner.tasks.lock() {
                Ok(mut tasks) => std::mem::take(&mut *tasks),
                Err(_) => return,
            };
            if pending.is_empty() {
                return;
            }
            for task in pending {
                let _ = task.await;
            }
        }
    }

    /// Emit `session_end` (at most once) and wait for outstanding requests.
    pub async fn shutdown(&self) {
        self.track_session_end();
        self.flush().await;
    }

    /// Run a diagnostic log call only in debug mode.
    pub(crate) fn log(&self, emit: impl FnOnce()) {
        if self.inner.settings.debug_mode {
            emit();
        }
    }

    pub(crate) fn runtime(&self) -> Option<&Handle> {
        self.inner.runtime.as_ref()
    }

    /// Remember a spawned task so `flush` can await it.
    pub(crate) fn keep_task(&self, task: JoinHandle<()>) {
        if let Ok(mut tasks) = self.inner.tasks.lock() {
            tasks.retain(|t| !t.is_finished());
            tasks.push(task);
        }
    }
}

impl TokebiClient<HttpTransport> {
    /// Start a client that talks to `config.endpoint` over HTTP.
    pub fn start_http(
        config: &TokebiConfig,
        host_title: Option<&str>,
        store: Option<&dyn KeyValueStore>,
    ) -> TokebiResult<Self> {
        config.validate()?;
        let transport = HttpTransport::new(HttpTransportConfig::from_config(config))?;
        Self::start(config, host_title, transport, store)
    }
}

impl<T> std::fmt::Debug for TokebiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokebiClient")
            .field("player_id", &self.inner.player_id)
            .field("registration", &*self.inner.registration.borrow())
            .field("session_ended", &self.inner.session_ended.load(Ordering::Relaxed))
            .field("settings", &self.inner.settings)
            .finish()
    }
}
