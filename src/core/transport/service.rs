//! Transport service - orchestrates the transport layer.
//!
//! This service provides a unified interface for starting the gateway with
//! the configured transport mechanism.

use tracing::info;

use super::stdio::StdioTransport;
use super::{TransportConfig, TransportResult};
use crate::core::GatewayServer;

/// Transport service - manages the transport layer for the gateway.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Create a transport service from environment variables.
    pub fn from_env() -> Self {
        Self::new(TransportConfig::from_env())
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Start the transport with the given gateway server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: GatewayServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            TransportConfig::Stdio => StdioTransport::run(server).await,
        }
    }
}
