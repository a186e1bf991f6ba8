//! Rule-pack selection for a run.

use std::fmt;
use std::str::FromStr;

use rv_core::Standard;

/// Which standard's cases a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSelector {
    /// Every case in the catalog.
    All,
    /// Only cases belonging to one standard.
    Standard(Standard),
}

impl RuleSelector {
    pub fn matches(&self, standard: Standard) -> bool {
        match self {
            RuleSelector::All => true,
            RuleSelector::Standard(selected) => *selected == standard,
        }
    }
}

impl fmt::Display for RuleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSelector::All => f.write_str("all"),
            RuleSelector::Standard(standard) => write!(f, "{}", standard),
        }
    }
}

/// Error parsing a selector from the CLI.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown rule selector `{0}` (expected `all` or a standard name)")]
pub struct ParseSelectorError(pub String);

impl FromStr for RuleSelector {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(RuleSelector::All);
        }
        s.parse::<Standard>()
            .map(RuleSelector::Standard)
            .map_err(|_| ParseSelectorError(s.to_string()))
    }
}
