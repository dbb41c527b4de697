//! Chaincode invocation tool definition.

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

/// Parameters for the chaincode invocation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InvokeChaincodeParams {
    /// Channel the chaincode is deployed on.
    #[schemars(description = "Channel name")]
    pub channel: String,

    /// Name of the deployed chaincode.
    #[schemars(description = "Chaincode name")]
    pub chaincode: String,

    /// Chaincode function to call.
    #[schemars(description = "Function name to invoke")]
    pub function: String,

    /// Ordered function arguments.
    #[schemars(description = "Ordered list of string arguments")]
    pub args: Vec<String>,
}

/// Chaincode invocation tool - submits a state-changing transaction.
pub struct InvokeChaincodeTool;

impl InvokeChaincodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "invoke_chaincode";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Invoke a chaincode function.";

    /// Controller endpoint this tool forwards to.
    pub const ENDPOINT: &'static str = "/chaincode/invoke";

    /// Build the request body the controller expects.
    pub fn request_payload(params: &InvokeChaincodeParams) -> Value {
        json!({
            "channel": params.channel,
            "chaincode": params.chaincode,
            "function": params.function,
            "args": params.args,
        })
    }

    /// Execute the tool logic.
    pub async fn execute(params: &InvokeChaincodeParams, backend: &BackendConfig) -> CallToolResult {
        info!(
            "Invoke chaincode tool called: {}.{} on '{}'",
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
            input_schema: schema_for_type::<InvokeChaincodeParams>().into(),
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
                let params: InvokeChaincodeParams =
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
    fn test_payload_preserves_arg_order() {
        let params: InvokeChaincodeParams = serde_json::from_value(json!({
            "channel": "mychannel",
            "chaincode": "mycc",
            "function": "CreateAsset",
            "args": ["asset1", "blue", "5", "tom"]
        }))
        .unwrap();

        let payload = InvokeChaincodeTool::request_payload(&params);
        assert_eq!(payload["args"], json!(["asset1", "blue", "5", "tom"]));
        assert_eq!(payload["function"], "CreateAsset");
    }

    #[test]
    fn test_all_params_are_required() {
        let result: Result<InvokeChaincodeParams, _> = serde_json::from_value(json!({
            "channel": "mychannel",
            "chaincode": "mycc",
            "function": "CreateAsset"
        }));
        assert!(result.is_err());
    }
}
