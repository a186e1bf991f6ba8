//! Harness orchestration: select, build, analyze, reconcile, report.

use std::sync::Arc;

use tokio::sync::Mutex;

use rv_build::{build_all, default_jobs, ArtifactDir, Compiler, CompilerConfig};
use rv_catalog::{Catalog, RuleSelector};
use rv_core::RunReport;

use crate::analyzer::Analyzer;
use crate::reconcile::{reconcile, reconcile_tool_error};

/// Run-level configuration.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub compiler: CompilerConfig,
    /// Bounded build worker count.
    pub jobs: usize,
    /// Keep the artifact directory after the run instead of deleting it.
    pub keep_artifacts: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            compiler: CompilerConfig::default(),
            jobs: default_jobs(),
            keep_artifacts: false,
        }
    }
}

/// Errors that abort a run before any case is processed.
///
/// Per-case failures never surface here; they are outcomes in the report.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("failed to create artifact directory: {0}")]
    Workspace(#[from] std::io::Error),
}

/// The conformance harness.
///
/// Generic over its two opaque collaborators so tests substitute
/// deterministic fakes for the real toolchains.
pub struct Harness<C, A> {
    compiler: Arc<C>,
    analyzer: A,
    config: HarnessConfig,
    /// At most one in-flight analyzer invocation per workspace;
    /// concurrent requests queue here.
    analyzer_gate: Mutex<()>,
}

impl<C, A> Harness<C, A>
where
    C: Compiler + 'static,
    A: Analyzer,
{
    pub fn new(compiler: C, analyzer: A, config: HarnessConfig) -> Self {
        Self {
            compiler: Arc::new(compiler),
            analyzer,
            config,
            analyzer_gate: Mutex::new(()),
        }
    }

    pub fn with_defaults(compiler: C, analyzer: A) -> Self {
        Self::new(compiler, analyzer, HarnessConfig::default())
    }

    /// Verify every selected case and aggregate the report.
    ///
    /// One unit failing to build resolves only its own cases; an analyzer
    /// failure resolves built cases to TOOL_ERROR. Both leave the rest of
    /// the catalog's results intact, and neither aborts the run.
    pub async fn run(
        &self,
        catalog: &Catalog,
        selector: &RuleSelector,
    ) -> Result<RunReport, HarnessError> {
        let cases = catalog.select(selector);
        let sources = Catalog::source_files(&cases);
        tracing::info!(
            cases = cases.len(),
            units = sources.len(),
            %selector,
            "starting verification run"
        );

        let artifact_dir = ArtifactDir::create()?;
        let artifacts = build_all(
            &self.compiler,
            &sources,
            artifact_dir.path(),
            &self.config.compiler,
            self.config.jobs,
        )
        .await;

        let built_units = artifacts.iter().filter(|a| a.build_succeeded).count();
        tracing::info!(built = built_units, total = artifacts.len(), "builds finished");

        let results = if built_units == 0 {
            // Nothing to analyze; every case resolves via its build result.
            reconcile(&cases, &artifacts, &[])
        } else {
            let _gate = self.analyzer_gate.lock().await;
            match self.analyzer.analyze(artifact_dir.path(), selector).await {
                Ok(findings) => {
                    tracing::info!(findings = findings.len(), "analysis finished");
                    reconcile(&cases, &artifacts, &findings)
                }
                Err(error) => reconcile_tool_error(&cases, &artifacts, &error),
            }
        };

        if self.config.keep_artifacts {
            let retained = artifact_dir.retain();
            tracing::info!(path = %retained.display(), "artifact directory retained");
        }

        Ok(RunReport::from_results(results))
    }
}
