//! Reconciling analyzer findings against catalog expectations.

use std::collections::HashMap;
use std::path::Path;

use rv_build::BuildArtifact;
use rv_core::{CaseState, Finding, Outcome, VerificationResult, ViolationCase};

use crate::analyzer::ToolError;

/// Match findings against cases and produce one result per case.
///
/// Pure and idempotent: reconciling the same (cases, artifacts, findings)
/// again yields the same results, so a report can be recomputed without
/// rebuilding. Cases whose unit failed to build resolve to BUILD_FAILED
/// and their findings (if any) are ignored.
pub fn reconcile(
    cases: &[ViolationCase],
    artifacts: &[BuildArtifact],
    findings: &[Finding],
) -> Vec<VerificationResult> {
    let built = build_status(artifacts);
    cases
        .iter()
        .map(|case| reconcile_case(case, &built, findings))
        .collect()
}

/// Resolve every case after an analyzer failure.
///
/// Built cases become TOOL_ERROR; units that never compiled keep
/// BUILD_FAILED. The run is never aborted for a tool failure, so one
/// broken analyzer invocation cannot hide build results.
pub fn reconcile_tool_error(
    cases: &[ViolationCase],
    artifacts: &[BuildArtifact],
    error: &ToolError,
) -> Vec<VerificationResult> {
    tracing::warn!(%error, "resolving built cases to TOOL_ERROR");
    let built = build_status(artifacts);
    cases
        .iter()
        .map(|case| {
            let state = CaseState::Pending;
            if unit_built(&built, case) {
                let state = state.mark_built().resolve(Outcome::ToolError);
                debug_assert!(state.is_terminal());
                VerificationResult::without_findings(case, Outcome::ToolError)
            } else {
                let state = state.mark_build_failed();
                debug_assert!(state.is_terminal());
                VerificationResult::without_findings(case, Outcome::BuildFailed)
            }
        })
        .collect()
}

fn build_status(artifacts: &[BuildArtifact]) -> HashMap<&Path, bool> {
    artifacts
        .iter()
        .map(|artifact| (artifact.source_path.as_path(), artifact.build_succeeded))
        .collect()
}

fn unit_built(built: &HashMap<&Path, bool>, case: &ViolationCase) -> bool {
    built
        .get(case.source_path.as_path())
        .copied()
        .unwrap_or(false)
}

fn reconcile_case(
    case: &ViolationCase,
    built: &HashMap<&Path, bool>,
    findings: &[Finding],
) -> VerificationResult {
    let state = CaseState::Pending;

    if !unit_built(built, case) {
        let state = state.mark_build_failed();
        debug_assert!(state.is_terminal());
        return VerificationResult::without_findings(case, Outcome::BuildFailed);
    }
    let state = state.mark_built();

    // Rule code is authoritative, location advisory: a matching finding
    // counts even when its line drifts outside the expected symbol.
    let matching: Vec<Finding> = findings
        .iter()
        .filter(|finding| finding.rule_code == case.rule_code && case.file_matches(&finding.file))
        .cloned()
        .collect();

    for finding in &matching {
        if !case.expected_symbol.covers_line(finding.line) {
            tracing::debug!(
                case = %case.id,
                line = finding.line,
                expected = %case.expected_symbol.describe(),
                "finding line drifted outside the expected location"
            );
        }
    }

    let outcome = if matching.is_empty() {
        Outcome::Missed
    } else {
        Outcome::Pass
    };
    let state = state.resolve(outcome);
    debug_assert!(state.is_terminal());

    VerificationResult {
        case_id: case.id.clone(),
        standard: case.standard,
        expected_rule_code: case.rule_code.clone(),
        matched: !matching.is_empty(),
        matching_findings: matching,
        outcome,
    }
}
