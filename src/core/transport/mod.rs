//! Transport layer for the gateway.
//!
//! The gateway speaks MCP over standard input/output - the line-oriented
//! transport every MCP client supports. The transport handles the connection
//! lifecycle and delegates message processing to the server handler.

mod config;
mod error;
mod service;

pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
