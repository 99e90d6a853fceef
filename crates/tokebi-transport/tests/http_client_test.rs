use std::time::Duration;

use serde_json::json;
use test_fixtures::FakeHttpServer;
use tokebi_core::errors::TransportError;
use tokebi_core::{TokebiConfig, Transport};
use tokebi_transport::{HttpTransport, HttpTransportConfig, RegistrationRequest};

fn transport_for(server: &FakeHttpServer) -> HttpTransport {
    HttpTransport::new(HttpTransportConfig {
        base_url: server.url(),
        api_key: "live_abc".into(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn posts_json_with_raw_api_key() {
    let server = FakeHttpServer::start().await;
    let transport = transport_for(&server);

    let body = json!({"eventType": "level_up", "payload": {"level": 2}});
    let response = transport.post_json("/api/track", &body).await.unwrap();
    assert_eq!(response.status, 200);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/track");
    assert_eq!(req.header("Authorization"), Some("live_abc"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.json(), body);
}

#[tokio::test]
async fn non_success_status_is_returned_not_raised() {
    let server = FakeHttpServer::start().await;
    server.respond("/api/games", 500, r#"{"error":"boom"}"#);
    let transport = transport_for(&server);

    let body = serde_json::to_value(RegistrationRequest::new("Slime Quest", "MV")).unwrap();
    let response = transport.post_json("/api/games", &body).await.unwrap();
    assert_eq!(response.status, 500);
    assert!(response.body.contains("boom"));
}

#[tokio::test]
async fn created_response_body_is_passed_through() {
    let server = FakeHttpServer::start().await;
    server.respond("/api/games", 201, r#"{"game_id":"g_77"}"#);
    let transport = transport_for(&server);

    let response = transport.post_json("/api/games", &json!({})).await.unwrap();
    assert_eq!(response.status, 201);
    assert_eq!(response.body, r#"{"game_id":"g_77"}"#);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let transport = HttpTransport::new(HttpTransportConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        api_key: "live_abc".into(),
        timeout: Duration::from_secs(2),
    })
    .unwrap();

    let err = transport
        .post_json("/api/track", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TransportError::Network { .. } | TransportError::Timeout { .. }
    ));
}

#[test]
fn config_is_derived_from_client_config() {
    let config = TokebiConfig {
        api_key: "live_abc".into(),
        endpoint: "https://example.test/".into(),
        request_timeout_secs: 7,
        ..TokebiConfig::default()
    };
    let http = HttpTransportConfig::from_config(&config);
    assert_eq!(http.base_url, "https://example.test");
    assert_eq!(http.api_key, "live_abc");
    assert_eq!(http.timeout, Duration::from_secs(7));
}
