//! HTTP client for the REST backend.
//!
//! One generic executor turns a resolved [`BackendRequest`] into exactly one
//! outbound HTTP call and translates the outcome into either a pretty-printed
//! response body or a [`BackendError`].

use std::time::Duration;

use tracing::{debug, warn};

use super::error::{BackendError, BackendResult};
use super::request::{BackendRequest, Method};
use crate::core::config::BackendConfig;

/// Client for the store-management REST backend.
///
/// Holds no mutable state; safe to share behind an `Arc` across concurrent
/// tool invocations. Connection pooling is whatever reqwest provides.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    probe_on_call: bool,
    probe_timeout: Duration,
}

impl BackendClient {
    /// Create a client from the backend configuration.
    pub fn new(config: &BackendConfig) -> BackendResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(BackendError::Init)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            probe_on_call: config.probe_on_call,
            probe_timeout: Duration::from_secs(config.probe_timeout_secs),
        })
    }

    /// The configured base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lightweight liveness probe against the backend root.
    ///
    /// Any HTTP response counts as alive (the API root answers 404, which
    /// still proves the server is up); only a transport-level failure is
    /// treated as unreachable.
    pub async fn probe(&self) -> BackendResult<()> {
        self.http
            .get(&self.base_url)
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(|e| {
                warn!("Backend liveness probe failed: {}", e);
                BackendError::Unreachable {
                    url: self.base_url.clone(),
                    source: e,
                }
            })?;
        Ok(())
    }

    /// Execute a resolved request against the backend.
    ///
    /// Issues at most one real HTTP call (plus the optional probe) and
    /// returns the response body pretty-printed when it is JSON, verbatim
    /// otherwise.
    pub async fn execute(&self, request: &BackendRequest) -> BackendResult<String> {
        if self.probe_on_call {
            self.probe().await?;
        }

        let url = format!("{}{}", self.base_url, request.path);
        debug!("{} {}", request.method.as_str(), url);

        let mut builder = self.http.request(to_reqwest_method(request.method), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| BackendError::from_send_error(&url, e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| BackendError::Transport {
            url: url.clone(),
            source: e,
        })?;

        if !status.is_success() {
            warn!(
                "Backend rejected {} {}: {}",
                request.method.as_str(),
                url,
                status
            );
            return Err(BackendError::Rejected { status, body });
        }

        Ok(pretty_print(body))
    }
}

/// Pretty-print a JSON body; pass non-JSON bodies through untouched.
fn pretty_print(body: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or(body),
        Err(_) => body,
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
    }
}
