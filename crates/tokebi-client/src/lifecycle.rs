//! Session lifecycle: one `session_end` per client, whichever teardown
//! signal arrives first.

use std::sync::atomic::Ordering;

use tokebi_core::constants::SESSION_END_EVENT;
use tokebi_core::Transport;
use tokebi_observability::tracing_setup::events;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::TokebiClient;

/// Capacity of the signal channel created by [`LifecycleHooks::install`].
const SIGNAL_BUFFER: usize = 16;

/// Teardown-related notifications from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    /// The app or page is being hidden for good (`beforeunload`/`pagehide`).
    PageHide,
    /// Visibility flipped; only `hidden: true` ends the session.
    VisibilityChange { hidden: bool },
    /// Process or page is unloading.
    Unload,
}

impl LifecycleSignal {
    /// Whether this signal ends the session.
    pub fn qualifies(&self) -> bool {
        match self {
            Self::PageHide | Self::Unload => true,
            Self::VisibilityChange { hidden } => *hidden,
        }
    }
}

impl<T: Transport> TokebiClient<T> {
    /// React to a host signal. Returns whether `session_end` was emitted.
    pub fn handle_signal(&self, signal: LifecycleSignal) -> bool {
        if !signal.qualifies() {
            return false;
        }
        self.track_session_end()
    }

    /// Emit `session_end` unless the gate is still closed or it has already
    /// been emitted. Returns whether this call claimed the session end; the
    /// event itself may still be dropped if there is no runtime to send it.
    pub fn track_session_end(&self) -> bool {
        if !self.is_initialized() {
            return false;
        }
        if self
            .inner
            .session_ended
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        if self.emit(SESSION_END_EVENT, &serde_json::Map::new()) {
            self.log(|| events::session_ended(&self.game_id()));
        }
        true
    }
}

/// A listener task that feeds host signals into a client.
///
/// Dropping the hooks closes the channel and ends the listener.
#[derive(Debug)]
pub struct LifecycleHooks {
    sender: mpsc::Sender<LifecycleSignal>,
    listener: JoinHandle<()>,
    runtime: Handle,
}

impl LifecycleHooks {
    /// Spawn the listener on the runtime the client was started on. `None`
    /// if it was started outside one; the host can still call
    /// [`TokebiClient::handle_signal`] directly.
    pub fn install<T: Transport>(client: &TokebiClient<T>) -> Option<Self> {
        let runtime = client.runtime()?.clone();
        let (sender, mut receiver) = mpsc::channel(SIGNAL_BUFFER);
        let client = client.clone();
        let listener = runtime.spawn(async move {
            while let Some(signal) = receiver.recv().await {
                client.handle_signal(signal);
            }
        });
        Some(Self {
            sender,
            listener,
            runtime,
        })
    }

    /// A sender for host code that raises signals from elsewhere.
    pub fn sender(&self) -> mpsc::Sender<LifecycleSignal> {
        self.sender.clone()
    }

    /// Deliver a signal to the listener. `false` if the listener is gone.
    pub async fn signal(&self, signal: LifecycleSignal) -> bool {
        self.sender.send(signal).await.is_ok()
    }

    /// Map the process interrupt (Ctrl-C) to [`LifecycleSignal::Unload`].
    /// Holds only a weak sender, so it does not keep the listener alive.
    pub fn forward_ctrl_c(&self) -> JoinHandle<()> {
        let sender = self.sender.downgrade();
        self.runtime.spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                if let Some(sender) = sender.upgrade() {
                    let _ = sender.send(LifecycleSignal::Unload).await;
                }
            }
        })
    }

    /// Close this handle's sender and wait for the listener to drain.
    /// The listener ends once every [`LifecycleHooks::sender`] clone is
    /// dropped as well.
    pub async fn close(self) {
        let Self {
            sender, listener, ..
        } = self;
        drop(sender);
        let _ = listener.await;
    }
}
