//! reqwest-backed [`Transport`]. One attempt per request, no retries.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tokebi_core::config::defaults;
use tokebi_core::errors::TransportError;
use tokebi_core::{TokebiConfig, Transport, TransportResponse};

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Base URL of the analytics API.
    pub base_url: String,
    /// Raw API key, sent verbatim as the `Authorization` header.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpTransportConfig {
    pub fn from_config(config: &TokebiConfig) -> Self {
        Self {
            base_url: config.endpoint_base().to_string(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(defaults::DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// HTTP transport client. The reqwest client is built once and shared by
/// every request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: HttpTransportConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::InvalidRequest {
                path: config.base_url.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

fn classify(path: &str, e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout {
            reason: format!("{path}: {e}"),
        }
    } else if e.is_builder() {
        TransportError::InvalidRequest {
            path: path.to_string(),
            reason: e.to_string(),
        }
    } else {
        TransportError::Network {
            reason: format!("{path}: {e}"),
        }
    }
}

impl Transport for HttpTransport {
    fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        let url = self.url(path);
        let path = path.to_string();
        // Built eagerly so the future owns everything it needs.
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.config.api_key.as_str())
            .json(body);

        async move {
            tracing::trace!(path = %path, "transport: POST");
            let response = request.send().await.map_err(|e| classify(&path, e))?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| classify(&path, e))?;
            Ok(TransportResponse::new(status, body))
        }
    }
}
