//! Coding standards covered by the rule packs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A coding standard targeted by an external rule pack.
///
/// The string forms (`MISRA-C`, `CERT-C`, ...) are stable: they appear in
/// catalog documents, report lines, and the CLI rule selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Standard {
    /// MISRA C 2012
    #[serde(rename = "MISRA-C")]
    MisraC,
    /// SEI CERT C
    #[serde(rename = "CERT-C")]
    CertC,
    /// MISRA C++ 2008
    #[serde(rename = "MISRA-CPP")]
    MisraCpp,
    /// SEI CERT C++
    #[serde(rename = "CERT-CPP")]
    CertCpp,
    /// AUTOSAR C++14
    #[serde(rename = "AUTOSAR-CPP")]
    AutosarCpp,
}

impl Standard {
    /// All standards, in report order.
    pub const ALL: [Standard; 5] = [
        Standard::MisraC,
        Standard::CertC,
        Standard::MisraCpp,
        Standard::CertCpp,
        Standard::AutosarCpp,
    ];

    /// Stable string form used in documents and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Standard::MisraC => "MISRA-C",
            Standard::CertC => "CERT-C",
            Standard::MisraCpp => "MISRA-CPP",
            Standard::CertCpp => "CERT-CPP",
            Standard::AutosarCpp => "AUTOSAR-CPP",
        }
    }

    /// Whether this standard's snippets are C++ translation units.
    pub fn is_cpp(&self) -> bool {
        matches!(
            self,
            Standard::MisraCpp | Standard::CertCpp | Standard::AutosarCpp
        )
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a standard from its string form.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown standard `{0}` (expected MISRA-C, CERT-C, MISRA-CPP, CERT-CPP or AUTOSAR-CPP)")]
pub struct ParseStandardError(pub String);

impl FromStr for Standard {
    type Err = ParseStandardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MISRA-C" => Ok(Standard::MisraC),
            "CERT-C" => Ok(Standard::CertC),
            "MISRA-CPP" => Ok(Standard::MisraCpp),
            "CERT-CPP" => Ok(Standard::CertCpp),
            "AUTOSAR-CPP" => Ok(Standard::AutosarCpp),
            _ => Err(ParseStandardError(s.to_string())),
        }
    }
}
