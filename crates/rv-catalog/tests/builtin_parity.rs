//! The repository catalog document and the builtin suite must agree.

use std::path::{Path, PathBuf};

use rv_catalog::Catalog;

fn repo_catalog_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../catalog/catalog.json")
}

#[test]
fn repo_catalog_loads_and_sources_exist() {
    let catalog = Catalog::load(&repo_catalog_path()).expect("repo catalog must validate");
    assert_eq!(catalog.len(), Catalog::builtin().len());
}

#[test]
fn repo_catalog_matches_builtin_suite() {
    let loaded = Catalog::load(&repo_catalog_path()).expect("repo catalog must validate");
    let builtin = Catalog::builtin();

    for (from_file, from_code) in loaded.cases().iter().zip(builtin.cases()) {
        assert_eq!(from_file.id, from_code.id);
        assert_eq!(from_file.standard, from_code.standard);
        assert_eq!(from_file.rule_code, from_code.rule_code);
        assert_eq!(from_file.expected_symbol, from_code.expected_symbol);
        assert_eq!(from_file.severity, from_code.severity);
        // Paths differ in base directory but must name the same unit.
        assert_eq!(
            from_file.source_path.file_name(),
            from_code.source_path.file_name(),
            "case {}",
            from_file.id
        );
    }
}
