//! Chaincode query tool definition.
//!
//! Same request shape as invocation, but routed to the controller's read-only
//! query endpoint.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use crate::core::config::{BackendConfig, Config};
use crate::domains::tools::backend::BackendClient;

use super::super::common::backend_result;

/// Parameters for the chaincode query tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryChaincodeParams {
    /// Channel the chaincode is deployed on.
    #[schemars(description = "Channel name")]
    pub channel: String,

    /// Name of the deployed chaincode.
    #[schemars(description = "Chaincode name")]
    pub chaincode: String,

    /// Chaincode function to call.
    #[schemars(description = "Function name to query")]
    pub function: String,

    /// Ordered function arguments.
    #[schemars(description = "Ordered list of string arguments")]
    pub args: Vec<String>,
}

/// Chaincode query tool - submits a read-only call.
pub struct QueryChaincodeTool;

impl QueryChaincodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "query_chaincode";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Query a chaincode function.";

    /// Controller endpoint this tool forwards to.
    pub const ENDPOINT: &'static str = "/chaincode/query";

    /// Build the request body the controller expects.
    pub fn request_payload(params: &QueryChaincodeParams) -> Value {
        json!({
            "channel": params.channel,
            "chaincode": params.chaincode,
            "function": params.function,
            "args": params.args,
        })
    }

    /// Execute the tool logic.
    pub async fn execute(params: &QueryChaincodeParams, backend: &BackendConfig) -> CallToolResult {
        info!(
            "Query chaincode tool called: {}.{} on '{}'",
            params.chaincode, params.function, params.channel
        );
        let client = BackendClient::new(backend.clone());
        backend_result(
            client
                .post_json(Self::ENDPOINT, Some(Self::request_payload(params)))
                .await,
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<QueryChaincodeParams>().into(),
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
                let params: QueryChaincodeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config.backend).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_payload_matches_invoke_shape() {
        let args = json!({
            "channel": "mychannel",
            "chaincode": "mycc",
            "function": "ReadAsset",
            "args": ["asset1"]
        });
        let params: QueryChaincodeParams = serde_json::from_value(args.clone()).unwrap();
        assert_eq!(QueryChaincodeTool::request_payload(&params), args);
    }
}
