//! Tool-specific error types.
//!
//! One variant per failure mode the gateway can observe: transport failures
//! talking to the controller, unparseable controller responses, local I/O
//! failures, and dependency-resolution subprocess failures. The original
//! diagnostic text is always preserved in the variant's fields.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The HTTP request itself failed: connection refused, timeout, DNS.
    #[error("Backend request failed: {0}")]
    Transport(String),

    /// The backend replied, but the body was not valid JSON. Carries both
    /// the parse failure and the raw body text for debuggability.
    #[error("Invalid JSON: {detail}, raw: {raw}")]
    MalformedResponse {
        /// Description of the JSON parse failure.
        detail: String,
        /// Raw response body as received.
        raw: String,
    },

    /// Local directory or file operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dependency-resolution command could not be launched.
    #[error("Failed to launch dependency resolution: {0}")]
    CommandLaunch(String),

    /// The dependency-resolution command exited nonzero.
    #[error("go mod tidy failed: {stderr}")]
    CommandFailed {
        /// Captured standard error stream of the command.
        stderr: String,
    },
}

impl ToolError {
    /// Create a new transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new malformed-response error.
    pub fn malformed_response(detail: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::MalformedResponse {
            detail: detail.into(),
            raw: raw.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_response_message_embeds_raw_text() {
        let err = ToolError::malformed_response("expected value at line 1", "not json");
        let msg = err.to_string();
        assert!(msg.contains("expected value at line 1"));
        assert!(msg.contains("not json"));
    }

    #[test]
    fn test_command_failed_message_embeds_stderr() {
        let err = ToolError::CommandFailed {
            stderr: "go: cannot find module".to_string(),
        };
        assert!(err.to_string().contains("go: cannot find module"));
    }
}
