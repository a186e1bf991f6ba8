//! Catalog loading and validation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use rv_core::ViolationCase;

use crate::selector::RuleSelector;

/// Fatal catalog errors.
///
/// Every variant aborts the run before any case is processed; the CLI maps
/// them to exit code 2.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog contains no cases")]
    Empty,

    #[error("duplicate case id `{id}`")]
    DuplicateId { id: String },

    #[error("case `{id}` references missing source file {path}")]
    MissingSource { id: String, path: PathBuf },
}

/// On-disk catalog document: `{ "cases": [...] }`.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    cases: Vec<ViolationCase>,
}

/// An ordered, validated collection of violation cases.
///
/// Explicitly constructed and passed down; there is no ambient catalog
/// state. Order is the document order and is stable across runs.
#[derive(Debug, Clone)]
pub struct Catalog {
    cases: Vec<ViolationCase>,
}

impl Catalog {
    /// Load and validate a catalog document.
    ///
    /// Relative `source_path`s are resolved against the document's parent
    /// directory. Fails on unreadable or malformed documents, duplicate
    /// ids, empty case lists, and missing source files.
    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: CatalogDocument =
            serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let mut cases = document.cases;
        for case in &mut cases {
            if case.source_path.is_relative() {
                case.source_path = base.join(&case.source_path);
            }
        }

        let catalog = Catalog::from_cases(cases)?;
        catalog.check_sources_exist()?;
        Ok(catalog)
    }

    /// Build a catalog from already-resolved cases.
    ///
    /// Validates id uniqueness and non-emptiness but does not probe the
    /// filesystem; `load` is the path external documents take.
    pub fn from_cases(cases: Vec<ViolationCase>) -> Result<Catalog, CatalogError> {
        if cases.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for case in &cases {
            if !seen.insert(case.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: case.id.clone(),
                });
            }
        }
        Ok(Catalog { cases })
    }

    /// Construct from static definitions known to be well-formed.
    ///
    /// Uniqueness of the builtin suite is pinned by tests; the assertion
    /// guards against edits that introduce a duplicate.
    pub(crate) fn from_static(cases: Vec<ViolationCase>) -> Catalog {
        debug_assert!(!cases.is_empty());
        debug_assert!({
            let mut seen = HashSet::new();
            cases.iter().all(|case| seen.insert(case.id.as_str()))
        });
        Catalog { cases }
    }

    fn check_sources_exist(&self) -> Result<(), CatalogError> {
        for case in &self.cases {
            if !case.source_path.is_file() {
                return Err(CatalogError::MissingSource {
                    id: case.id.clone(),
                    path: case.source_path.clone(),
                });
            }
        }
        Ok(())
    }

    /// All cases, in document order.
    pub fn cases(&self) -> &[ViolationCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Cases matching the selector, preserving catalog order.
    pub fn select(&self, selector: &RuleSelector) -> Vec<ViolationCase> {
        self.cases
            .iter()
            .filter(|case| selector.matches(case.standard))
            .cloned()
            .collect()
    }

    /// Distinct source files of the given cases, in first-appearance order.
    ///
    /// Cases sharing a file share one translation unit, mirroring how the
    /// real toolchain batches files.
    pub fn source_files(cases: &[ViolationCase]) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();
        for case in cases {
            if seen.insert(case.source_path.as_path()) {
                files.push(case.source_path.clone());
            }
        }
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use rv_core::{ExpectedSymbol, Severity, Standard};

    fn case(id: &str, standard: Standard, source: &str) -> ViolationCase {
        ViolationCase {
            id: id.to_string(),
            standard,
            rule_code: format!("{}-X", standard),
            source_path: PathBuf::from(source),
            expected_symbol: ExpectedSymbol::Function("f".to_string()),
            severity: Severity::Required,
        }
    }

    #[test]
    fn test_duplicate_ids_rejected_across_standards() {
        let cases = vec![
            case("dup-1", Standard::MisraC, "a.c"),
            case("dup-1", Standard::CertCpp, "b.cpp"),
        ];
        let err = Catalog::from_cases(cases).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id } if id == "dup-1"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            Catalog::from_cases(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_select_preserves_order() {
        let catalog = Catalog::from_cases(vec![
            case("m-1", Standard::MisraC, "a.c"),
            case("c-1", Standard::CertC, "b.c"),
            case("m-2", Standard::MisraC, "a.c"),
        ])
        .unwrap();

        let misra = catalog.select(&RuleSelector::Standard(Standard::MisraC));
        assert_eq!(misra.len(), 2);
        assert_eq!(misra[0].id, "m-1");
        assert_eq!(misra[1].id, "m-2");

        let all = catalog.select(&RuleSelector::All);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_source_files_dedupe_in_first_appearance_order() {
        let cases = vec![
            case("m-1", Standard::MisraC, "a.c"),
            case("c-1", Standard::CertC, "b.c"),
            case("m-2", Standard::MisraC, "a.c"),
        ];
        let files = Catalog::source_files(&cases);
        assert_eq!(files, vec![PathBuf::from("a.c"), PathBuf::from("b.c")]);
    }

    #[test]
    fn test_load_resolves_relative_paths_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("misra_violations.c");
        std::fs::write(&source, "int main(void) { return 0; }\n").unwrap();

        let doc = r#"{
            "cases": [{
                "id": "misra-c-21.3",
                "standard": "MISRA-C",
                "rule_code": "MISRA-C-21.3",
                "source_path": "misra_violations.c",
                "expected_symbol": { "function": "misra_rule_21_3" },
                "severity": "required"
            }]
        }"#;
        let catalog_path = dir.path().join("catalog.json");
        let mut file = std::fs::File::create(&catalog_path).unwrap();
        file.write_all(doc.as_bytes()).unwrap();

        let catalog = Catalog::load(&catalog_path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.cases()[0].source_path, source);
    }

    #[test]
    fn test_load_rejects_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let doc = r#"{
            "cases": [{
                "id": "misra-c-21.3",
                "standard": "MISRA-C",
                "rule_code": "MISRA-C-21.3",
                "source_path": "not_there.c",
                "expected_symbol": { "function": "misra_rule_21_3" }
            }]
        }"#;
        let catalog_path = dir.path().join("catalog.json");
        std::fs::write(&catalog_path, doc).unwrap();

        let err = Catalog::load(&catalog_path).unwrap_err();
        assert!(matches!(err, CatalogError::MissingSource { .. }));
    }

    #[test]
    fn test_load_rejects_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        std::fs::write(&catalog_path, "{ not json").unwrap();

        let err = Catalog::load(&catalog_path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_unreadable_path() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
