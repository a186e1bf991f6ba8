//! Violation cases: one named rule paired with the source that breaks it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::standard::Standard;

/// Where in the source file a violation is expected to be reported.
///
/// Location is advisory during reconciliation: the rule code is
/// authoritative and a finding whose line drifts outside this range still
/// counts, tolerating line-number differences between compiler front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedSymbol {
    /// The named function containing the violation.
    Function(String),
    /// An inclusive line range.
    Lines { start: u32, end: u32 },
}

impl ExpectedSymbol {
    /// Whether a reported line is inside the declared location.
    ///
    /// A function symbol carries no line information here, so it covers
    /// every line; only explicit ranges can report drift.
    pub fn covers_line(&self, line: u32) -> bool {
        match self {
            ExpectedSymbol::Function(_) => true,
            ExpectedSymbol::Lines { start, end } => *start <= line && line <= *end,
        }
    }

    /// Human-readable form for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            ExpectedSymbol::Function(name) => format!("function `{}`", name),
            ExpectedSymbol::Lines { start, end } => format!("lines {}-{}", start, end),
        }
    }
}

/// Coarse severity tag attached to a case.
///
/// MISRA vocabulary, reused as a plain tag for the other standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mandatory,
    Required,
    Advisory,
}

/// One catalog entry: a minimal snippet intentionally breaking exactly one
/// named rule, paired with its expected detection outcome.
///
/// Immutable once loaded. Ids are unique across the whole catalog, even
/// across standards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationCase {
    /// Unique case id, e.g. `misra-c-21.3`.
    pub id: String,
    /// Standard the rule belongs to.
    pub standard: Standard,
    /// Rule code as the analyzer emits it, e.g. `MISRA-C-21.3` or `EXP30-C`.
    pub rule_code: String,
    /// Translation unit containing the violation.
    pub source_path: PathBuf,
    /// Expected finding location (advisory).
    pub expected_symbol: ExpectedSymbol,
    /// Severity tag.
    #[serde(default = "Severity::default_required")]
    pub severity: Severity,
}

impl Severity {
    fn default_required() -> Severity {
        Severity::Required
    }
}

impl ViolationCase {
    /// Whether an analyzer-reported file refers to this case's source.
    ///
    /// Compares final path components so absolute paths reported by the
    /// analyzer match catalog-relative sources.
    pub fn file_matches(&self, reported: &str) -> bool {
        match (self.source_file_name(), Path::new(reported).file_name()) {
            (Some(ours), Some(theirs)) => ours == theirs,
            _ => false,
        }
    }

    /// Final component of the source path.
    pub fn source_file_name(&self) -> Option<&std::ffi::OsStr> {
        self.source_path.file_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(source_path: &str) -> ViolationCase {
        ViolationCase {
            id: "misra-c-21.3".to_string(),
            standard: Standard::MisraC,
            rule_code: "MISRA-C-21.3".to_string(),
            source_path: PathBuf::from(source_path),
            expected_symbol: ExpectedSymbol::Function("misra_rule_21_3".to_string()),
            severity: Severity::Required,
        }
    }

    #[test]
    fn test_file_matches_ignores_directories() {
        let case = case("catalog/sources/misra_violations.c");
        assert!(case.file_matches("misra_violations.c"));
        assert!(case.file_matches("/tmp/work/misra_violations.c"));
        assert!(!case.file_matches("cert_c_violations.c"));
    }

    #[test]
    fn test_covers_line_for_ranges() {
        let symbol = ExpectedSymbol::Lines { start: 10, end: 20 };
        assert!(symbol.covers_line(10));
        assert!(symbol.covers_line(20));
        assert!(!symbol.covers_line(9));
        assert!(!symbol.covers_line(21));
    }

    #[test]
    fn test_function_symbol_covers_everything() {
        let symbol = ExpectedSymbol::Function("f".to_string());
        assert!(symbol.covers_line(1));
        assert!(symbol.covers_line(u32::MAX));
    }

    #[test]
    fn test_case_deserializes_with_default_severity() {
        let json = r#"{
            "id": "cert-c-exp30",
            "standard": "CERT-C",
            "rule_code": "EXP30-C",
            "source_path": "sources/cert_c_violations.c",
            "expected_symbol": { "function": "cert_exp30_c" }
        }"#;
        let case: ViolationCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.severity, Severity::Required);
        assert_eq!(
            case.expected_symbol,
            ExpectedSymbol::Function("cert_exp30_c".to_string())
        );
    }

    #[test]
    fn test_expected_symbol_lines_deserializes() {
        let json = r#"{ "lines": { "start": 5, "end": 9 } }"#;
        let symbol: ExpectedSymbol = serde_json::from_str(json).unwrap();
        assert_eq!(symbol, ExpectedSymbol::Lines { start: 5, end: 9 });
    }
}
