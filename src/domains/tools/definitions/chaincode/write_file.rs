//! Chaincode materialization tool definition.
//!
//! The one local-only tool: writes generated Go chaincode to a fresh
//! directory with a synthesized `go.mod`, then runs `go mod tidy` there.
//! No HTTP involved.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::config::{ChaincodeConfig, Config};
use crate::domains::tools::error::ToolError;

use super::super::common::error_result;

/// Fixed name of the source file inside the materialized directory.
const SOURCE_FILE: &str = "chaincode.go";

/// Fixed name of the build manifest inside the materialized directory.
const MANIFEST_FILE: &str = "go.mod";

/// Parameters for the chaincode materialization tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WriteChaincodeFileParams {
    /// Chaincode module name; also names the target subdirectory.
    #[schemars(description = "Chaincode name (used as module name and directory name)")]
    pub name: String,

    /// Go source text to write verbatim.
    #[schemars(description = "Go chaincode source code")]
    pub code: String,

    /// Base directory to materialize under. Defaults to the configured
    /// output directory when omitted.
    #[serde(default)]
    #[schemars(description = "Base output directory (default: configured chaincode directory)")]
    pub path: Option<String>,
}

/// Result of a chaincode materialization.
#[derive(Debug, Serialize, JsonSchema)]
struct WriteChaincodeResult {
    /// Directory the chaincode was written to.
    directory: String,
    /// Path of the written source file.
    source_file: String,
    /// Path of the written manifest file.
    manifest_file: String,
    /// Whether materialization and dependency resolution succeeded.
    success: bool,
}

/// Chaincode materialization tool - writes source plus `go.mod` and runs
/// dependency resolution.
pub struct WriteChaincodeFileTool;

impl WriteChaincodeFileTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "write_chaincode_file";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Write Go chaincode code to a new directory, add go.mod, and run go mod tidy.";

    /// Render the `go.mod` contents for a chaincode module.
    fn manifest_contents(name: &str) -> String {
        format!(
            "module {name}\n\ngo 1.20\n\nrequire github.com/hyperledger/fabric-contract-api-go v1.1.0\n"
        )
    }

    /// Materialize the chaincode on disk and resolve its dependencies.
    ///
    /// Directory creation is idempotent and both files overwrite any prior
    /// contents. On failure a half-written directory may be left behind; no
    /// rollback is attempted.
    fn materialize(
        params: &WriteChaincodeFileParams,
        chaincode: &ChaincodeConfig,
    ) -> Result<WriteChaincodeResult, ToolError> {
        let base = params
            .path
            .as_deref()
            .unwrap_or(chaincode.output_dir.as_str());
        let dir: PathBuf = Path::new(base).join(&params.name);

        fs::create_dir_all(&dir)?;

        let source_path = dir.join(SOURCE_FILE);
        fs::write(&source_path, &params.code)?;

        let manifest_path = dir.join(MANIFEST_FILE);
        fs::write(&manifest_path, Self::manifest_contents(&params.name))?;

        info!("Chaincode '{}' written to {}", params.name, dir.display());

        let output = Command::new(&chaincode.go_binary)
            .args(["mod", "tidy"])
            .current_dir(&dir)
            .output()
            .map_err(|e| ToolError::CommandLaunch(e.to_string()))?;

        if !output.status.success() {
            return Err(ToolError::CommandFailed {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(WriteChaincodeResult {
            directory: dir.display().to_string(),
            source_file: source_path.display().to_string(),
            manifest_file: manifest_path.display().to_string(),
            success: true,
        })
    }

    /// Execute the tool logic.
    pub fn execute(params: &WriteChaincodeFileParams, chaincode: &ChaincodeConfig) -> CallToolResult {
        info!("Write chaincode file tool called for '{}'", params.name);

        match Self::materialize(params, chaincode) {
            Ok(result) => {
                let summary = format!(
                    "Chaincode and go.mod written to {} and go mod tidy succeeded.",
                    result.directory
                );
                CallToolResult {
                    content: vec![Content::text(summary)],
                    structured_content: serde_json::to_value(&result).ok(),
                    is_error: Some(false),
                    meta: None,
                }
            }
            Err(e) => {
                warn!("Chaincode materialization failed: {}", e);
                error_result(&e.to_string())
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<WriteChaincodeFileParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<WriteChaincodeResult>().into()),
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
                let params: WriteChaincodeFileParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config.chaincode))
            }
            .boxed()
        })
    }
}
