//! Common result helpers shared across tool definitions.
//!
//! Every tool reduces its outcome to a `CallToolResult`: either the backend
//! payload passed through unmodified, or an error message. Nothing else ever
//! crosses the protocol boundary.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

use super::super::error::ToolError;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result carrying a backend payload unmodified.
///
/// The payload is attached as structured content and rendered as pretty JSON
/// text for clients that only read the text channel.
pub fn payload_result(payload: Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());
    CallToolResult {
        content: vec![Content::text(text)],
        structured_content: Some(payload),
        is_error: Some(false),
        meta: None,
    }
}

/// Reduce a backend adapter outcome to a `CallToolResult`.
pub fn backend_result(outcome: Result<Value, ToolError>) -> CallToolResult {
    match outcome {
        Ok(payload) => payload_result(payload),
        Err(e) => error_result(&e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_result_preserves_payload() {
        let payload = json!({"status": "ok", "message": "network is up"});
        let result = payload_result(payload.clone());
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(payload));
    }

    #[test]
    fn test_backend_result_error_carries_message() {
        let result = backend_result(Err(ToolError::transport("connection refused")));
        assert!(result.is_error.unwrap_or(false));
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => &t.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.contains("connection refused"));
    }
}
