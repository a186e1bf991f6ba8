//! The analyzer capability and its system implementation.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::process::Command;

use rv_catalog::RuleSelector;
use rv_core::{BoxFuture, Finding};

/// Analyzer invocation failures.
///
/// Isolated per run: a tool error resolves the affected cases to
/// TOOL_ERROR instead of aborting the harness.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ToolError {
    #[error("failed to launch analyzer `{program}`: {message}")]
    Launch { program: String, message: String },

    #[error("analyzer `{program}` exited with {code:?}: {message}")]
    Crashed {
        program: String,
        code: Option<i32>,
        message: String,
    },

    #[error("malformed findings document: {0}")]
    Malformed(String),

    #[error("analyzer timed out after {0:?}")]
    Timeout(Duration),
}

/// Analyzer invocation settings.
///
/// The program is expected to print a findings document on stdout:
/// `{ "findings": [ { "rule_code", "file", "line", "message" } ] }`.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub program: String,
    /// Flags passed before the workspace and selector arguments.
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            program: "rule-analyzer".to_string(),
            args: Vec::new(),
            timeout: Duration::from_secs(300),
        }
    }
}

/// On-the-wire findings document.
#[derive(Debug, Serialize, Deserialize)]
struct FindingsDocument {
    findings: Vec<Finding>,
}

/// Parse an analyzer findings document.
pub fn parse_findings(text: &str) -> Result<Vec<Finding>, ToolError> {
    serde_json::from_str::<FindingsDocument>(text)
        .map(|document| document.findings)
        .map_err(|e| ToolError::Malformed(e.to_string()))
}

/// Opaque analyzer collaborator.
///
/// Tests substitute deterministic fakes; production uses
/// [`SystemAnalyzer`]. Invocations are serialized per workspace by the
/// harness, since most static-analysis tools do not tolerate concurrent
/// runs on one workspace.
pub trait Analyzer: Send + Sync {
    /// Analyze the workspace and return every finding for the selected
    /// rule packs.
    fn analyze<'a>(
        &'a self,
        workspace: &'a Path,
        selector: &'a RuleSelector,
    ) -> BoxFuture<'a, Result<Vec<Finding>, ToolError>>;
}

/// Invokes an external analyzer command as a subprocess.
#[derive(Debug, Clone, Default)]
pub struct SystemAnalyzer {
    config: AnalyzerConfig,
}

impl SystemAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }
}

impl Analyzer for SystemAnalyzer {
    fn analyze<'a>(
        &'a self,
        workspace: &'a Path,
        selector: &'a RuleSelector,
    ) -> BoxFuture<'a, Result<Vec<Finding>, ToolError>> {
        Box::pin(async move {
            let mut cmd = Command::new(&self.config.program);
            cmd.args(&self.config.args)
                .arg("--workspace")
                .arg(workspace)
                .arg("--rules")
                .arg(selector.to_string());

            let output = tokio::time::timeout(self.config.timeout, cmd.output())
                .await
                .map_err(|_| ToolError::Timeout(self.config.timeout))?
                .map_err(|e| ToolError::Launch {
                    program: self.config.program.clone(),
                    message: e.to_string(),
                })?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(ToolError::Crashed {
                    program: self.config.program.clone(),
                    code: output.status.code(),
                    message: first_line(&stderr),
                });
            }

            parse_findings(&String::from_utf8_lossy(&output.stdout))
        })
    }
}

fn first_line(text: &str) -> String {
    text.lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("no output")
        .to_string()
}
