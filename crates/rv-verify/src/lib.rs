//! # rv-verify
//!
//! Verifier for the conformance harness.
//!
//! Runs the external analyzer (an opaque capability behind the
//! [`Analyzer`] trait) over the built artifacts, then reconciles its
//! findings against the catalog's expectations:
//!
//! - a case PASSes when at least one finding matches its rule code and
//!   file (ANY-match; duplicates still count once)
//! - otherwise it is MISSED
//! - cases whose unit failed to compile resolve to BUILD_FAILED without
//!   the analyzer ever running on them
//! - an analyzer crash resolves every built case to TOOL_ERROR and the
//!   run still completes
//!
//! BUILD_FAILED and TOOL_ERROR are terminal; the harness never retries
//! them, since the catalog sources are deterministic.

pub mod analyzer;
pub mod harness;
pub mod reconcile;

pub use analyzer::{Analyzer, AnalyzerConfig, SystemAnalyzer, ToolError};
pub use harness::{Harness, HarnessConfig, HarnessError};
pub use reconcile::{reconcile, reconcile_tool_error};
