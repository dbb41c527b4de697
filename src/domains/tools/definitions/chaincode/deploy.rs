//! Chaincode deployment tool definition.

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

/// Parameters for the chaincode deployment tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeployChaincodeParams {
    /// Chaincode name.
    #[schemars(description = "Chaincode name")]
    pub name: String,

    /// Filesystem path to the chaincode source, as seen by the controller.
    #[schemars(description = "Path to the chaincode source directory")]
    pub path: String,

    /// Implementation language (e.g., "go", "javascript").
    #[schemars(description = "Chaincode language, e.g. 'go'")]
    pub language: String,

    /// Chaincode version tag (default: "1.0").
    #[serde(default = "default_version")]
    #[schemars(description = "Chaincode version (default: '1.0')")]
    pub version: String,

    /// Target channel (default: "mychannel").
    #[serde(default = "default_channel")]
    #[schemars(description = "Target channel (default: 'mychannel')")]
    pub channel: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_channel() -> String {
    "mychannel".to_string()
}

/// Chaincode deployment tool - asks the controller to deploy chaincode onto a
/// channel.
pub struct DeployChaincodeTool;

impl DeployChaincodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "deploy_chaincode";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Deploy chaincode to the network.";

    /// Controller endpoint this tool forwards to.
    pub const ENDPOINT: &'static str = "/chaincode/deploy";

    /// Build the request body the controller expects. Field names are
    /// verbatim: the controller deserializes exactly this schema.
    pub fn request_payload(params: &DeployChaincodeParams) -> Value {
        json!({
            "name": params.name,
            "path": params.path,
            "language": params.language,
            "version": params.version,
            "channel": params.channel,
        })
    }

    /// Execute the tool logic.
    pub async fn execute(params: &DeployChaincodeParams, backend: &BackendConfig) -> CallToolResult {
        info!(
            "Deploy chaincode tool called: '{}' v{} on '{}'",
            params.name, params.version, params.channel
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
            input_schema: schema_for_type::<DeployChaincodeParams>().into(),
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
                let params: DeployChaincodeParams =
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

    fn base_args() -> Value {
        json!({
            "name": "mycc",
            "path": "../asset-transfer-basic/chaincode-go/",
            "language": "go"
        })
    }

    #[test]
    fn test_version_and_channel_default() {
        let params: DeployChaincodeParams = serde_json::from_value(base_args()).unwrap();
        assert_eq!(params.version, "1.0");
        assert_eq!(params.channel, "mychannel");
    }

    #[test]
    fn test_omitted_defaults_build_same_payload_as_explicit() {
        let omitted: DeployChaincodeParams = serde_json::from_value(base_args()).unwrap();

        let mut explicit_args = base_args();
        explicit_args["version"] = json!("1.0");
        explicit_args["channel"] = json!("mychannel");
        let explicit: DeployChaincodeParams = serde_json::from_value(explicit_args).unwrap();

        assert_eq!(
            DeployChaincodeTool::request_payload(&omitted),
            DeployChaincodeTool::request_payload(&explicit),
        );
    }

    #[test]
    fn test_payload_field_names_are_verbatim() {
        let params: DeployChaincodeParams = serde_json::from_value(base_args()).unwrap();
        let payload = DeployChaincodeTool::request_payload(&params);
        assert_eq!(payload["name"], "mycc");
        assert_eq!(payload["path"], "../asset-transfer-basic/chaincode-go/");
        assert_eq!(payload["language"], "go");
        assert_eq!(payload["version"], "1.0");
        assert_eq!(payload["channel"], "mychannel");
        assert_eq!(payload.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_missing_required_param_is_rejected() {
        let result: Result<DeployChaincodeParams, _> =
            serde_json::from_value(json!({"name": "mycc"}));
        assert!(result.is_err());
    }
}
