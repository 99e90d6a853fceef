//! Session-end latch and the host signal channel.

use test_fixtures::{LogCapture, RecordingTransport};
use tokebi_client::{LifecycleHooks, LifecycleSignal, TokebiClient};
use tokebi_core::TokebiConfig;

fn config() -> TokebiConfig {
    TokebiConfig {
        api_key: "live_abc".into(),
        ..TokebiConfig::default()
    }
}

async fn ready(transport: &RecordingTransport) -> TokebiClient<RecordingTransport> {
    let client = TokebiClient::start(&config(), None, transport.clone(), None).unwrap();
    assert!(client.wait_until_initialized().await);
    client
}

fn session_ends(transport: &RecordingTransport) -> usize {
    transport
        .event_types()
        .iter()
        .filter(|t| *t == "session_end")
        .count()
}

#[test]
fn only_hidden_visibility_changes_qualify() {
    assert!(LifecycleSignal::PageHide.qualifies());
    assert!(LifecycleSignal::Unload.qualifies());
    assert!(LifecycleSignal::VisibilityChange { hidden: true }.qualifies());
    assert!(!LifecycleSignal::VisibilityChange { hidden: false }.qualifies());
}

#[tokio::test]
async fn every_teardown_signal_together_yields_one_session_end() {
    let transport = RecordingTransport::new();
    let client = ready(&transport).await;

    assert!(client.handle_signal(LifecycleSignal::PageHide));
    assert!(!client.handle_signal(LifecycleSignal::VisibilityChange { hidden: true }));
    assert!(!client.handle_signal(LifecycleSignal::Unload));
    client.flush().await;

    assert!(client.is_session_ended());
    assert_eq!(session_ends(&transport), 1);
}

#[tokio::test]
async fn becoming_visible_does_not_end_the_session() {
    let transport = RecordingTransport::new();
    let client = ready(&transport).await;

    assert!(!client.handle_signal(LifecycleSignal::VisibilityChange { hidden: false }));
    client.flush().await;

    assert!(!client.is_session_ended());
    assert_eq!(session_ends(&transport), 0);
}

#[tokio::test]
async fn session_end_before_registration_is_a_no_op() {
    let transport = RecordingTransport::holding_registration();
    let client = TokebiClient::start(&config(), None, transport.clone(), None).unwrap();

    assert!(!client.track_session_end());
    assert!(!client.is_session_ended());

    transport.release_registration();
    client.wait_until_initialized().await;

    // The latch was never set, so a later teardown still counts.
    assert!(client.track_session_end());
    client.flush().await;
    assert_eq!(session_ends(&transport), 1);
}

#[tokio::test]
async fn clones_share_the_latch() {
    let transport = RecordingTransport::new();
    let client = ready(&transport).await;
    let other = client.clone();

    assert!(other.track_session_end());
    assert!(!client.track_session_end());
    client.flush().await;
    assert_eq!(session_ends(&transport), 1);
}

#[tokio::test]
async fn concurrent_teardowns_race_to_one_session_end() {
    let transport = RecordingTransport::new();
    let client = ready(&transport).await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.handle_signal(LifecycleSignal::Unload) })
        })
        .collect();
    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }
    client.flush().await;

    assert_eq!(winners, 1);
    assert_eq!(session_ends(&transport), 1);
}

#[tokio::test]
async fn shutdown_ends_the_session_and_drains_requests() {
    let transport = RecordingTransport::new();
    let client = ready(&transport).await;
    client.track_event("map_changed");

    client.shutdown().await;

    assert_eq!(
        transport.event_types(),
        vec!["session_start", "map_changed", "session_end"]
    );
    assert_eq!(client.metrics().in_flight(), 0);

    // A second shutdown is harmless.
    client.shutdown().await;
    assert_eq!(session_ends(&transport), 1);
}

#[tokio::test]
async fn hooks_forward_signals_to_the_client() {
    let transport = RecordingTransport::new();
    let client = ready(&transport).await;
    let hooks = LifecycleHooks::install(&client).unwrap();

    assert!(hooks.signal(LifecycleSignal::VisibilityChange { hidden: false }).await);
    assert!(hooks.signal(LifecycleSignal::PageHide).await);
    assert!(hooks.sender().send(LifecycleSignal::Unload).await.is_ok());
    hooks.close().await;
    client.flush().await;

    assert!(client.is_session_ended());
    assert_eq!(session_ends(&transport), 1);
}

#[test]
fn hooks_need_a_runtime() {
    let client =
        TokebiClient::start(&config(), None, RecordingTransport::new(), None).unwrap();
    assert!(LifecycleHooks::install(&client).is_none());
    // Direct handling still works without one.
    assert!(client.handle_signal(LifecycleSignal::Unload));
}

#[test]
fn session_end_is_only_logged_once_actually_sent() {
    let (logs, _guard) = LogCapture::install();
    let client =
        TokebiClient::start(&config(), None, RecordingTransport::new(), None).unwrap();

    assert!(client.handle_signal(LifecycleSignal::Unload));
    assert!(logs.has_event("delivery_failed"));
    assert!(!logs.has_event("session_ended"));
}

#[tokio::test]
async fn sent_session_end_is_logged() {
    let (logs, _guard) = LogCapture::install();
    let transport = RecordingTransport::new();
    let client = ready(&transport).await;

    assert!(client.track_session_end());
    client.flush().await;
    assert!(logs.has_event("session_ended"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn host_thread_teardown_reaches_the_transport() {
    let transport = RecordingTransport::new();
    let client = ready(&transport).await;

    let host = client.clone();
    let claimed = std::thread::spawn(move || host.handle_signal(LifecycleSignal::PageHide))
        .join()
        .unwrap();
    client.flush().await;

    assert!(claimed);
    assert_eq!(session_ends(&transport), 1);
    assert_eq!(client.metrics().failed, 0);
}

#[test]
fn hooks_follow_the_runtime_the_client_started_on() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();
    let transport = RecordingTransport::new();
    let client = runtime.block_on(async {
        TokebiClient::start(&config(), None, transport.clone(), None).unwrap()
    });
    runtime.block_on(client.wait_until_initialized());

    // Installed from a plain thread, outside any runtime context.
    let hooks = LifecycleHooks::install(&client).unwrap();
    runtime.block_on(async {
        assert!(hooks.signal(LifecycleSignal::Unload).await);
        hooks.close().await;
        client.flush().await;
    });
    assert_eq!(session_ends(&transport), 1);
}
