//! Per-case outcomes and the verification state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal outcome for a single catalog case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// At least one finding matched the expected rule in the expected file.
    Pass,
    /// The unit built and was analyzed, but no matching finding exists.
    Missed,
    /// The translation unit failed to compile; the analyzer never ran on it.
    BuildFailed,
    /// The analyzer crashed, timed out, or returned a malformed document.
    ToolError,
}

impl Outcome {
    /// Report form: `PASS`, `MISSED`, `BUILD_FAILED` or `TOOL_ERROR`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Missed => "MISSED",
            Outcome::BuildFailed => "BUILD_FAILED",
            Outcome::ToolError => "TOOL_ERROR",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verification state of one case.
///
/// `Pending -> Done(BuildFailed)`, or
/// `Pending -> Built -> Done(ToolError | Pass | Missed)`.
/// All `Done` states are terminal; illegal transitions are programming
/// errors and assert in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseState {
    /// Initial state, before the unit's build result is known.
    Pending,
    /// The translation unit compiled; awaiting analysis.
    Built,
    /// Terminal.
    Done(Outcome),
}

impl CaseState {
    /// The unit compiled successfully.
    #[must_use]
    pub fn mark_built(self) -> CaseState {
        debug_assert!(matches!(self, CaseState::Pending), "built from {:?}", self);
        CaseState::Built
    }

    /// The unit failed to compile. Terminal.
    #[must_use]
    pub fn mark_build_failed(self) -> CaseState {
        debug_assert!(
            matches!(self, CaseState::Pending),
            "build failure from {:?}",
            self
        );
        CaseState::Done(Outcome::BuildFailed)
    }

    /// Resolve a built case to its analysis outcome. Terminal.
    #[must_use]
    pub fn resolve(self, outcome: Outcome) -> CaseState {
        debug_assert!(matches!(self, CaseState::Built), "resolve from {:?}", self);
        debug_assert!(
            outcome != Outcome::BuildFailed,
            "BuildFailed is decided before analysis"
        );
        CaseState::Done(outcome)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CaseState::Done(_))
    }

    /// The terminal outcome, if reached.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            CaseState::Done(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_failure_is_terminal() {
        let state = CaseState::Pending.mark_build_failed();
        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(Outcome::BuildFailed));
    }

    #[test]
    fn test_built_resolves_to_analysis_outcome() {
        for outcome in [Outcome::Pass, Outcome::Missed, Outcome::ToolError] {
            let state = CaseState::Pending.mark_built().resolve(outcome);
            assert_eq!(state.outcome(), Some(outcome));
        }
    }

    #[test]
    fn test_pending_has_no_outcome() {
        assert_eq!(CaseState::Pending.outcome(), None);
        assert_eq!(CaseState::Pending.mark_built().outcome(), None);
    }

    #[test]
    fn test_outcome_report_forms() {
        assert_eq!(Outcome::Pass.as_str(), "PASS");
        assert_eq!(Outcome::Missed.as_str(), "MISSED");
        assert_eq!(Outcome::BuildFailed.as_str(), "BUILD_FAILED");
        assert_eq!(Outcome::ToolError.as_str(), "TOOL_ERROR");
    }
}
