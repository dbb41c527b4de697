//! Channel creation tool definition.

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

/// Parameters for the channel creation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateChannelParams {
    /// Channel name to create (default: "mychannel").
    #[serde(default = "default_channel")]
    #[schemars(description = "Channel name to create (default: 'mychannel')")]
    pub channel: String,
}

fn default_channel() -> String {
    "mychannel".to_string()
}

/// Channel creation tool - asks the controller to create a ledger channel.
pub struct CreateChannelTool;

impl CreateChannelTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_channel";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a channel. Default is 'mychannel'.";

    /// Controller endpoint this tool forwards to.
    pub const ENDPOINT: &'static str = "/channel/create";

    /// Build the request body the controller expects.
    pub fn request_payload(params: &CreateChannelParams) -> Value {
        json!({ "channel": params.channel })
    }

    /// Execute the tool logic.
    pub async fn execute(params: &CreateChannelParams, backend: &BackendConfig) -> CallToolResult {
        info!("Create channel tool called for channel '{}'", params.channel);
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
            input_schema: schema_for_type::<CreateChannelParams>().into(),
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
                let params: CreateChannelParams =
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
    fn test_channel_defaults_to_mychannel() {
        let params: CreateChannelParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.channel, "mychannel");
    }

    #[test]
    fn test_omitted_channel_builds_same_payload_as_explicit_default() {
        let omitted: CreateChannelParams = serde_json::from_value(json!({})).unwrap();
        let explicit: CreateChannelParams =
            serde_json::from_value(json!({"channel": "mychannel"})).unwrap();

        assert_eq!(
            CreateChannelTool::request_payload(&omitted),
            CreateChannelTool::request_payload(&explicit),
        );
    }

    #[test]
    fn test_payload_uses_verbatim_field_name() {
        let params: CreateChannelParams =
            serde_json::from_value(json!({"channel": "orders"})).unwrap();
        let payload = CreateChannelTool::request_payload(&params);
        assert_eq!(payload, json!({"channel": "orders"}));
    }
}
