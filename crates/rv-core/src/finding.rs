//! Findings reported by the external analyzer.

use serde::{Deserialize, Serialize};

/// One reported violation instance from the external analyzer.
///
/// Read-only once parsed. The harness does not constrain the analyzer's
/// wire format beyond requiring it be parseable into this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule code, in the analyzer's vocabulary.
    pub rule_code: String,
    /// File the finding was reported in. May be absolute.
    pub file: String,
    /// 1-based line number.
    pub line: u32,
    /// Free-form message from the analyzer.
    #[serde(default)]
    pub message: String,
}

impl Finding {
    /// Compact single-line form for logs and diagnostics.
    pub fn format_compact(&self) -> String {
        format!("{} {}:{}", self.rule_code, self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_without_message() {
        let json = r#"{ "rule_code": "MISRA-C-21.3", "file": "misra_violations.c", "line": 101 }"#;
        let finding: Finding = serde_json::from_str(json).unwrap();
        assert_eq!(finding.rule_code, "MISRA-C-21.3");
        assert_eq!(finding.line, 101);
        assert!(finding.message.is_empty());
    }

    #[test]
    fn test_format_compact() {
        let finding = Finding {
            rule_code: "EXP30-C".to_string(),
            file: "cert_c_violations.c".to_string(),
            line: 19,
            message: "unsequenced modification".to_string(),
        };
        assert_eq!(finding.format_compact(), "EXP30-C cert_c_violations.c:19");
    }
}
