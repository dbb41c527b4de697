//! Configuration management for the gateway.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Default address of the Fabric network controller.
const DEFAULT_BACKEND_URL: &str = "http://localhost:8081";

/// Default request timeout in seconds. Network bring-up and chaincode
/// deployment are slow backend operations, so this is deliberately generous.
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 300;

/// Default base directory for materialized chaincode projects.
const DEFAULT_CHAINCODE_DIR: &str = "generated-chaincodes";

/// Main configuration structure for the gateway.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Fabric controller backend configuration.
    pub backend: BackendConfig,

    /// Chaincode materialization configuration.
    pub chaincode: ChaincodeConfig,

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

/// Configuration for the Fabric controller backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the controller's HTTP API, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Per-request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration for chaincode materialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaincodeConfig {
    /// Base directory under which one subdirectory per chaincode is created.
    pub output_dir: String,

    /// Name of the Go binary used for dependency resolution.
    /// Overridable so tests can exercise command failures.
    pub go_binary: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    }
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_CHAINCODE_DIR.to_string(),
            go_binary: "go".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "fabric-mcp-gateway".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            backend: BackendConfig::default(),
            chaincode: ChaincodeConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
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
    /// Environment variables are prefixed with `FABRIC_MCP_`.
    /// For example: `FABRIC_MCP_BACKEND_URL`, `FABRIC_MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("FABRIC_MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("FABRIC_MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("FABRIC_MCP_BACKEND_URL") {
            config.backend.base_url = url.trim_end_matches('/').to_string();
            info!("Backend URL set to {}", config.backend.base_url);
        } else {
            warn!(
                "FABRIC_MCP_BACKEND_URL not set - using default controller address {}",
                DEFAULT_BACKEND_URL
            );
        }

        if let Ok(timeout) = std::env::var("FABRIC_MCP_BACKEND_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.backend.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring unparseable FABRIC_MCP_BACKEND_TIMEOUT_SECS: {}",
                    timeout
                ),
            }
        }

        if let Ok(dir) = std::env::var("FABRIC_MCP_CHAINCODE_DIR") {
            config.chaincode.output_dir = dir;
        }

        if let Ok(go_binary) = std::env::var("FABRIC_MCP_GO_BINARY") {
            config.chaincode.go_binary = go_binary;
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
    fn test_default_backend() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:8081");
        assert_eq!(config.backend.timeout(), Duration::from_secs(300));
    }

    #[test]
    fn test_default_chaincode() {
        let config = Config::default();
        assert_eq!(config.chaincode.output_dir, "generated-chaincodes");
        assert_eq!(config.chaincode.go_binary, "go");
    }

    #[test]
    fn test_backend_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FABRIC_MCP_BACKEND_URL", "http://controller:9000/");
        }
        let config = Config::from_env();
        // Trailing slash is stripped so endpoint joining stays predictable
        assert_eq!(config.backend.base_url, "http://controller:9000");
        unsafe {
            std::env::remove_var("FABRIC_MCP_BACKEND_URL");
        }
    }

    #[test]
    fn test_timeout_from_env_unparseable_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FABRIC_MCP_BACKEND_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.backend.timeout_secs, 300);
        unsafe {
            std::env::remove_var("FABRIC_MCP_BACKEND_TIMEOUT_SECS");
        }
    }
}
