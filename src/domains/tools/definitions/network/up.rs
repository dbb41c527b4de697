//! Network bring-up tool definition.

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

/// Parameters for the network bring-up tool. The operation takes none.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NetworkUpParams {}

/// Network bring-up tool - asks the controller to start the Fabric network.
pub struct NetworkUpTool;

impl NetworkUpTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "network_up";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Bring the Hyperledger Fabric network up.";

    /// Controller endpoint this tool forwards to.
    pub const ENDPOINT: &'static str = "/network/up";

    /// Execute the tool logic.
    pub async fn execute(_params: &NetworkUpParams, backend: &BackendConfig) -> CallToolResult {
        info!("Network up tool called");
        let client = BackendClient::new(backend.clone());
        backend_result(client.post_json(Self::ENDPOINT, None).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<NetworkUpParams>().into(),
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
                let params: NetworkUpParams =
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
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned 200 response and return the base URL plus a handle
    /// to the request bytes the backend saw.
    async fn spawn_backend(body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 8192];
            let n = stream.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]).into_owned();
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
            request
        });

        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn test_network_up_posts_to_endpoint_and_passes_payload() {
        let (base_url, request) = spawn_backend(r#"{"status":"ok"}"#).await;
        let backend = BackendConfig {
            base_url,
            timeout_secs: 5,
        };

        let result = NetworkUpTool::execute(&NetworkUpParams::default(), &backend).await;
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(json!({"status": "ok"})));

        let seen = request.await.unwrap();
        assert!(seen.starts_with("POST /network/up HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_network_up_twice_is_pure_pass_through() {
        // No idempotence logic in this layer: two calls, two backend hits,
        // two success results with whatever the backend says.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            for _ in 0..2 {
                let (mut stream, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 8192];
                let _ = stream.read(&mut buf).await;
                let body = r#"{"status":"ok"}"#;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        let backend = BackendConfig {
            base_url: format!("http://{}", addr),
            timeout_secs: 5,
        };

        for _ in 0..2 {
            let result = NetworkUpTool::execute(&NetworkUpParams::default(), &backend).await;
            assert_eq!(result.is_error, Some(false));
            assert_eq!(result.structured_content, Some(json!({"status": "ok"})));
        }
    }

    #[tokio::test]
    async fn test_network_up_unreachable_backend_is_error_result() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = BackendConfig {
            base_url: format!("http://{}", addr),
            timeout_secs: 5,
        };

        let result = NetworkUpTool::execute(&NetworkUpParams::default(), &backend).await;
        assert!(result.is_error.unwrap_or(false));
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => &t.text,
            _ => panic!("Expected text content"),
        };
        assert!(!text.is_empty());
    }
}
