//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod chaincode;
pub mod channel;
pub mod common;
pub mod network;

pub use chaincode::{
    DeployChaincodeParams, DeployChaincodeTool, InvokeChaincodeParams, InvokeChaincodeTool,
    QueryChaincodeParams, QueryChaincodeTool, WriteChaincodeFileParams, WriteChaincodeFileTool,
};
pub use channel::{CreateChannelParams, CreateChannelTool};
pub use network::{NetworkDownTool, NetworkUpTool};
