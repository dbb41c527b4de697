//! Domains module containing business logic organized by bounded contexts.
//!
//! The gateway has a single bounded context: the tools it exposes over MCP
//! and the adapters those tools delegate to.

pub mod tools;
