//! Fabric MCP Gateway Library
//!
//! This crate exposes a Hyperledger Fabric network-orchestration backend as a
//! set of MCP tools: network lifecycle, channel creation, chaincode
//! deployment/invocation/queries, and local materialization of generated
//! chaincode source.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the server handler, and the transport layer
//! - **domains**: Business logic
//!   - **tools**: the MCP tools and the HTTP adapter they delegate to
//!
//! # Example
//!
//! ```rust,no_run
//! use fabric_mcp_gateway::{core::Config, core::GatewayServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = GatewayServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, GatewayServer, Result};
