//! Tools domain module.
//!
//! This module holds everything the gateway exposes as MCP tools: the six
//! backend-forwarding operations and the local chaincode materializer.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `backend.rs` - Backend Request Adapter (HTTP bridge to the controller)
//! - `router.rs` - Dynamic ToolRouter builder for the transport layer
//! - `registry.rs` - Central tool registry (names + metadata)
//! - `error.rs` - Tool-specific error taxonomy
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, execute(), to_tool(), and create_route()
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs`

pub mod backend;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use backend::BackendClient;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
