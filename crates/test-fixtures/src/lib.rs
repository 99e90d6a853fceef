//! Test fixtures for the Tokebi workspace: golden payload datasets, a
//! scripted in-process transport, failing storage, log capture, and a
//! minimal fake HTTP server for exercising the real reqwest transport.

mod http_server;
mod log_capture;
mod recording_transport;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokebi_core::errors::StorageError;
use tokebi_core::KeyValueStore;

pub use http_server::{CapturedRequest, FakeHttpServer};
pub use log_capture::LogCapture;
pub use recording_transport::{RecordedRequest, RecordingTransport, Scripted, RECORDED_GAME_ID};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// A golden flattening case: `input` must flatten to exactly `expected`,
/// keys in the same order.
#[derive(Debug, Clone, Deserialize)]
pub struct PayloadCase {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub input: serde_json::Value,
    pub expected: serde_json::Map<String, serde_json::Value>,
}

/// Load every golden case under `payloads/`.
pub fn payload_cases() -> Vec<PayloadCase> {
    list_fixtures("payloads")
        .into_iter()
        .map(|path| {
            let relative = format!(
                "payloads/{}",
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            );
            load_fixture(&relative)
        })
        .collect()
}

/// Storage that is present but refuses every read and write.
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable {
            reason: "storage disabled by test".into(),
        })
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable {
            reason: "storage disabled by test".into(),
        })
    }
}
