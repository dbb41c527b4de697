//! Tool Registry - central registration point for all tools.
//!
//! This module is the single source of truth for the gateway's tool set:
//! names for quick membership checks and `Tool` models for listing.

use rmcp::model::Tool;

use super::definitions::{
    CreateChannelTool, DeployChaincodeTool, InvokeChaincodeTool, NetworkDownTool, NetworkUpTool,
    QueryChaincodeTool, WriteChaincodeFileTool,
};

/// Tool registry - fixed set of operations the gateway exposes.
///
/// Tools are registered once at startup and never change during a run.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            NetworkUpTool::NAME,
            NetworkDownTool::NAME,
            CreateChannelTool::NAME,
            DeployChaincodeTool::NAME,
            InvokeChaincodeTool::NAME,
            QueryChaincodeTool::NAME,
            WriteChaincodeFileTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn all_tools() -> Vec<Tool> {
        vec![
            NetworkUpTool::to_tool(),
            NetworkDownTool::to_tool(),
            CreateChannelTool::to_tool(),
            DeployChaincodeTool::to_tool(),
            InvokeChaincodeTool::to_tool(),
            QueryChaincodeTool::to_tool(),
            WriteChaincodeFileTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"network_up"));
        assert!(names.contains(&"network_down"));
        assert!(names.contains(&"create_channel"));
        assert!(names.contains(&"deploy_chaincode"));
        assert!(names.contains(&"invoke_chaincode"));
        assert!(names.contains(&"query_chaincode"));
        assert!(names.contains(&"write_chaincode_file"));
    }

    #[test]
    fn test_all_tools_have_descriptions() {
        for tool in ToolRegistry::all_tools() {
            assert!(tool.description.is_some(), "{} lacks description", tool.name);
        }
    }
}
