//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[default]
    Stdio,
}

impl TransportConfig {
    /// Create a STDIO transport config.
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Load transport config from environment variables.
    ///
    /// STDIO is currently the only transport; unknown values of
    /// `FABRIC_MCP_TRANSPORT` fall back to it.
    pub fn from_env() -> Self {
        Self::Stdio
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
        }
    }
}
