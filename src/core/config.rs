//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL of the REST backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// REST backend configuration.
    pub backend: BackendConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the REST backend the tools call into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend API, e.g. `http://localhost:8000/api`.
    pub base_url: String,

    /// Timeout for each outbound request, in seconds.
    pub request_timeout_secs: u64,

    /// Whether to run a liveness probe against the backend root before
    /// each real call.
    pub probe_on_call: bool,

    /// Timeout for the liveness probe, in seconds.
    pub probe_timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            probe_on_call: true,
            probe_timeout_secs: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "store-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            backend: BackendConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// The backend base URL comes from `API_BASE_URL` (the same variable the
    /// backend's own tooling uses); everything else is prefixed with `MCP_`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("API_BASE_URL") {
            info!("Backend base URL loaded from environment: {}", base_url);
            config.backend.base_url = base_url;
        } else {
            warn!(
                "API_BASE_URL not set - using default backend at {}",
                DEFAULT_API_BASE_URL
            );
        }

        if let Ok(timeout) = std::env::var("MCP_BACKEND_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.backend.request_timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid MCP_BACKEND_TIMEOUT_SECS: {}", timeout),
            }
        }

        if let Ok(probe) = std::env::var("MCP_BACKEND_PROBE") {
            config.backend.probe_on_call = probe.to_lowercase() != "false" && probe != "0";
        }

        if let Ok(timeout) = std::env::var("MCP_BACKEND_PROBE_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.backend.probe_timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_BACKEND_PROBE_TIMEOUT_SECS: {}",
                    timeout
                ),
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_backend_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert!(config.backend.probe_on_call);
        assert_eq!(config.backend.probe_timeout_secs, 5);
    }

    #[test]
    fn test_base_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("API_BASE_URL", "http://backend:9000/api");
        }
        let config = Config::from_env();
        assert_eq!(config.backend.base_url, "http://backend:9000/api");
        unsafe {
            std::env::remove_var("API_BASE_URL");
        }
    }

    #[test]
    fn test_probe_disabled_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_BACKEND_PROBE", "false");
        }
        let config = Config::from_env();
        assert!(!config.backend.probe_on_call);
        unsafe {
            std::env::remove_var("MCP_BACKEND_PROBE");
        }
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_BACKEND_TIMEOUT_SECS", "not-a-number");
        }
        let config = Config::from_env();
        assert_eq!(config.backend.request_timeout_secs, 30);
        unsafe {
            std::env::remove_var("MCP_BACKEND_TIMEOUT_SECS");
        }
    }
}
