//! Backend Request Adapter - HTTP bridge to the Fabric controller.
//!
//! Every backend-facing tool funnels through [`BackendClient::post_json`]:
//! one POST per invocation, a JSON body built from the tool's parameters,
//! and a uniform success/error outcome regardless of how the backend fails.

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::BackendConfig;

use super::error::ToolError;

/// HTTP client for the Fabric controller API.
///
/// A fresh `reqwest::Client` is built per call, so invocations share no
/// connection state. Each call is at-most-one-attempt: no pooling, no retry,
/// no backoff.
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendConfig,
}

impl BackendClient {
    /// Create a new client for the given backend configuration.
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    /// The configured base URL, mainly for logging.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Perform exactly one POST to `base_url + endpoint` and normalize the
    /// outcome.
    ///
    /// Normalization rules, in priority order:
    /// 1. transport failure (connection refused, timeout, DNS) ->
    ///    [`ToolError::Transport`] with the stringified failure;
    /// 2. body not parseable as JSON -> [`ToolError::MalformedResponse`]
    ///    carrying both the parse failure and the raw body text;
    /// 3. otherwise the parsed JSON body is returned unmodified.
    ///
    /// The HTTP status code is deliberately NOT inspected: the controller
    /// encodes success/failure inside its JSON body, and callers are expected
    /// to interpret the payload. Preserve this behavior; do not add
    /// status-based error detection here.
    pub async fn post_json(
        &self,
        endpoint: &str,
        payload: Option<Value>,
    ) -> Result<Value, ToolError> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!("POST {} (timeout {:?})", url, self.config.timeout());

        let client = reqwest::Client::builder()
            .timeout(self.config.timeout())
            .build()
            .map_err(|e| ToolError::transport(e.to_string()))?;

        let mut request = client.post(&url);
        if let Some(body) = &payload {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("Backend request to {} failed: {}", url, e);
                return Err(ToolError::transport(e.to_string()));
            }
        };

        let raw = response
            .text()
            .await
            .map_err(|e| ToolError::transport(e.to_string()))?;

        serde_json::from_str(&raw).map_err(|e| {
            warn!("Backend returned non-JSON body from {}: {}", url, e);
            ToolError::malformed_response(e.to_string(), raw.clone())
        })
    }
}
