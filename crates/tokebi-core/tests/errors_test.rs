use tokebi_core::errors::*;

#[test]
fn missing_api_key_message_tells_the_operator_what_to_set() {
    let msg = ConfigError::MissingApiKey.to_string();
    assert!(msg.contains("apiKey"));
}

#[test]
fn registration_rejected_carries_status() {
    let err = RegistrationError::Rejected { status: 503 };
    assert!(err.to_string().contains("503"));
}

#[test]
fn storage_error_converts_to_tokebi_error() {
    let err: TokebiError = StorageError::Unavailable {
        reason: "sandboxed".into(),
    }
    .into();
    assert!(matches!(err, TokebiError::Storage(_)));
    assert!(err.to_string().contains("sandboxed"));
}

#[test]
fn error_codes_are_stable() {
    let config: TokebiError = ConfigError::MissingApiKey.into();
    assert_eq!(config.error_code(), "MISSING_API_KEY");

    let transport: TokebiError = TransportError::NoRuntime {
        path: "/api/track".into(),
    }
    .into();
    assert_eq!(transport.error_code(), "NO_RUNTIME");

    let network = TransportError::Network {
        reason: "connection refused".into(),
    };
    assert_eq!(network.error_code(), "NETWORK_ERROR");
    assert_eq!(
        network.host_string(),
        "[NETWORK_ERROR] network error: connection refused"
    );
}
