//! Gateway server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool dispatch goes through the `ToolRouter` built in
//! `domains/tools/router.rs`.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - a parameters struct with its declared schema and defaults
//! - an `execute()` method (core logic)
//! - a `create_route()` method registered by the router
//!
//! Adding a new tool does NOT require modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::build_tool_router;

/// Instructions surfaced to MCP clients. Agents tend to emit backtick-quoted
/// pseudo-JSON; the controller only accepts strict JSON, so say so up front.
const INSTRUCTIONS: &str = "This server manages a Hyperledger Fabric network: bring the network \
     up or down, create channels, deploy, invoke, and query chaincode, and \
     write generated Go chaincode to disk. Always use double quotes (\") for \
     JSON keys and string values in payloads, not backticks (`). Example: \
     {\"name\": \"mycc\", \"path\": \"../asset-transfer-basic/chaincode-go/\", \
     \"channel\": \"mychannel\", \"version\": \"1.0\", \"language\": \"go\"}";

/// The main gateway server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. The registry
/// is an explicit, constructed value: built once here at startup and handed
/// to the protocol runtime, never reached through globals.
#[derive(Clone)]
pub struct GatewayServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl GatewayServer {
    /// Create a new gateway server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            tool_router: build_tool_router::<Self>(config.clone()),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration (for tool access).
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for GatewayServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
