//! Network teardown tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::core::config::{BackendConfig, Config};
use crate::domains::tools::backend::BackendClient;

use super::super::common::backend_result;

/// Parameters for the network teardown tool. The operation takes none.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NetworkDownParams {}

/// Network teardown tool - asks the controller to stop the Fabric network.
pub struct NetworkDownTool;

impl NetworkDownTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "network_down";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Bring the Hyperledger Fabric network down.";

    /// Controller endpoint this tool forwards to.
    pub const ENDPOINT: &'static str = "/network/down";

    /// Execute the tool logic.
    pub async fn execute(_params: &NetworkDownParams, backend: &BackendConfig) -> CallToolResult {
        info!("Network down tool called");
        let client = BackendClient::new(backend.clone());
        backend_result(client.post_json(Self::ENDPOINT, None).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<NetworkDownParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the transport layer.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: NetworkDownParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config.backend).await)
            }
            .boxed()
        })
    }
}
