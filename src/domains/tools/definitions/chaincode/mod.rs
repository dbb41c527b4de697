//! Chaincode tools: deployment, invocation, queries, and local
//! materialization of generated chaincode source.

pub mod deploy;
pub mod invoke;
pub mod query;
pub mod write_file;

pub use deploy::{DeployChaincodeParams, DeployChaincodeTool};
pub use invoke::{InvokeChaincodeParams, InvokeChaincodeTool};
pub use query::{QueryChaincodeParams, QueryChaincodeTool};
pub use write_file::{WriteChaincodeFileParams, WriteChaincodeFileTool};
