//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module just assembles
//! them into the router the server handler dispatches through.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    CreateChannelTool, DeployChaincodeTool, InvokeChaincodeTool, NetworkDownTool, NetworkUpTool,
    QueryChaincodeTool, WriteChaincodeFileTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(NetworkUpTool::create_route(config.clone()))
        .with_route(NetworkDownTool::create_route(config.clone()))
        .with_route(CreateChannelTool::create_route(config.clone()))
        .with_route(DeployChaincodeTool::create_route(config.clone()))
        .with_route(InvokeChaincodeTool::create_route(config.clone()))
        .with_route(QueryChaincodeTool::create_route(config.clone()))
        .with_route(WriteChaincodeFileTool::create_route(config))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 7);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"network_up"));
        assert!(names.contains(&"network_down"));
        assert!(names.contains(&"create_channel"));
        assert!(names.contains(&"deploy_chaincode"));
        assert!(names.contains(&"invoke_chaincode"));
        assert!(names.contains(&"query_chaincode"));
        assert!(names.contains(&"write_chaincode_file"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
