//! Builtin violation suite.
//!
//! The five training suites shipped under `catalog/sources/`, one case per
//! deliberately broken rule. Paths are relative to the repository root;
//! `Catalog::load` remains the entry point for external documents.

use std::path::Path;

use rv_core::{ExpectedSymbol, Severity, Standard, ViolationCase};

use crate::catalog::Catalog;

/// Directory holding the builtin defective translation units.
pub const SOURCES_DIR: &str = "catalog/sources";

const MISRA_C_FILE: &str = "misra_violations.c";
const CERT_C_FILE: &str = "cert_c_violations.c";
const MISRA_CPP_FILE: &str = "misra_cpp_violations.cpp";
const CERT_CPP_FILE: &str = "cert_cpp_violations.cpp";
const AUTOSAR_FILE: &str = "autosar_violations.cpp";

fn case(
    id: &str,
    standard: Standard,
    rule_code: &str,
    file: &str,
    function: &str,
    severity: Severity,
) -> ViolationCase {
    ViolationCase {
        id: id.to_string(),
        standard,
        rule_code: rule_code.to_string(),
        source_path: Path::new(SOURCES_DIR).join(file),
        expected_symbol: ExpectedSymbol::Function(function.to_string()),
        severity,
    }
}

fn case_at_lines(
    id: &str,
    standard: Standard,
    rule_code: &str,
    file: &str,
    start: u32,
    end: u32,
    severity: Severity,
) -> ViolationCase {
    ViolationCase {
        id: id.to_string(),
        standard,
        rule_code: rule_code.to_string(),
        source_path: Path::new(SOURCES_DIR).join(file),
        expected_symbol: ExpectedSymbol::Lines { start, end },
        severity,
    }
}

fn misra_c_cases() -> Vec<ViolationCase> {
    use Severity::{Advisory, Required};
    let standard = Standard::MisraC;
    vec![
        case("misra-c-2.2", standard, "MISRA-C-2.2", MISRA_C_FILE, "misra_rule_2_2", Required),
        case("misra-c-8.4", standard, "MISRA-C-8.4", MISRA_C_FILE, "misra_rule_8_4_func", Required),
        case("misra-c-10.1", standard, "MISRA-C-10.1", MISRA_C_FILE, "misra_rule_10_1", Required),
        case("misra-c-10.3", standard, "MISRA-C-10.3", MISRA_C_FILE, "misra_rule_10_3", Required),
        case("misra-c-11.3", standard, "MISRA-C-11.3", MISRA_C_FILE, "misra_rule_11_3", Required),
        case("misra-c-12.1", standard, "MISRA-C-12.1", MISRA_C_FILE, "misra_rule_12_1", Advisory),
        case("misra-c-14.4", standard, "MISRA-C-14.4", MISRA_C_FILE, "misra_rule_14_4", Required),
        case("misra-c-15.6", standard, "MISRA-C-15.6", MISRA_C_FILE, "misra_rule_15_6", Required),
        case("misra-c-17.7", standard, "MISRA-C-17.7", MISRA_C_FILE, "misra_rule_17_7", Required),
        case("misra-c-21.3", standard, "MISRA-C-21.3", MISRA_C_FILE, "misra_rule_21_3", Required),
        case("misra-c-21.6", standard, "MISRA-C-21.6", MISRA_C_FILE, "misra_rule_21_6", Required),
        case("misra-c-dir-4.6", standard, "MISRA-C-DIR-4.6", MISRA_C_FILE, "misra_dir_4_6", Advisory),
        // The 8.7 snippet is a file-scope object, not a function.
        case_at_lines("misra-c-8.7", standard, "MISRA-C-8.7", MISRA_C_FILE, 89, 89, Advisory),
    ]
}

fn cert_c_cases() -> Vec<ViolationCase> {
    use Severity::{Mandatory, Required};
    let standard = Standard::CertC;
    vec![
        case("cert-c-exp30", standard, "EXP30-C", CERT_C_FILE, "cert_exp30_c", Required),
        case("cert-c-exp33", standard, "EXP33-C", CERT_C_FILE, "cert_exp33_c", Required),
        case("cert-c-arr30", standard, "ARR30-C", CERT_C_FILE, "cert_arr30_c", Mandatory),
        case("cert-c-mem30", standard, "MEM30-C", CERT_C_FILE, "cert_mem30_c", Mandatory),
        case("cert-c-mem35", standard, "MEM35-C", CERT_C_FILE, "cert_mem35_c", Required),
        case("cert-c-str31", standard, "STR31-C", CERT_C_FILE, "cert_str31_c", Mandatory),
        case("cert-c-err33", standard, "ERR33-C", CERT_C_FILE, "cert_err33_c", Required),
        case("cert-c-sig30", standard, "SIG30-C", CERT_C_FILE, "cert_sig30_c", Required),
        case("cert-c-msc32", standard, "MSC32-C", CERT_C_FILE, "cert_msc32_c", Required),
        case("cert-c-int31", standard, "INT31-C", CERT_C_FILE, "cert_int31_c", Required),
        case("cert-c-dcl30", standard, "DCL30-C", CERT_C_FILE, "cert_dcl30_c", Required),
    ]
}

fn misra_cpp_cases() -> Vec<ViolationCase> {
    use Severity::Required;
    let standard = Standard::MisraCpp;
    vec![
        case("misra-cpp-0-1-1", standard, "MISRA-CPP-0-1-1", MISRA_CPP_FILE, "misra_cpp_0_1_1", Required),
        case("misra-cpp-2-10-2", standard, "MISRA-CPP-2-10-2", MISRA_CPP_FILE, "misra_cpp_2_10_2", Required),
        case("misra-cpp-5-0-3", standard, "MISRA-CPP-5-0-3", MISRA_CPP_FILE, "misra_cpp_5_0_3", Required),
        case("misra-cpp-5-2-4", standard, "MISRA-CPP-5-2-4", MISRA_CPP_FILE, "misra_cpp_5_2_4", Required),
        case("misra-cpp-6-4-2", standard, "MISRA-CPP-6-4-2", MISRA_CPP_FILE, "misra_cpp_6_4_2", Required),
        case("misra-cpp-6-6-5", standard, "MISRA-CPP-6-6-5", MISRA_CPP_FILE, "misra_cpp_6_6_5", Required),
        case("misra-cpp-15-3-5", standard, "MISRA-CPP-15-3-5", MISRA_CPP_FILE, "misra_cpp_15_3_5", Required),
        case("misra-cpp-18-0-1", standard, "MISRA-CPP-18-0-1", MISRA_CPP_FILE, "misra_cpp_18_0_1", Required),
        case("misra-cpp-18-4-1", standard, "MISRA-CPP-18-4-1", MISRA_CPP_FILE, "misra_cpp_18_4_1", Required),
        case("misra-cpp-27-0-1", standard, "MISRA-CPP-27-0-1", MISRA_CPP_FILE, "misra_cpp_27_0_1", Required),
    ]
}

fn cert_cpp_cases() -> Vec<ViolationCase> {
    use Severity::{Mandatory, Required};
    let standard = Standard::CertCpp;
    vec![
        case("cert-cpp-err50", standard, "ERR50-CPP", CERT_CPP_FILE, "cert_err50_cpp", Required),
        case("cert-cpp-dcl50", standard, "DCL50-CPP", CERT_CPP_FILE, "cert_dcl50_cpp", Required),
        case("cert-cpp-oop57", standard, "OOP57-CPP", CERT_CPP_FILE, "cert_oop57_cpp", Required),
        case("cert-cpp-exp55", standard, "EXP55-CPP", CERT_CPP_FILE, "cert_exp55_cpp", Required),
        case("cert-cpp-ctr50", standard, "CTR50-CPP", CERT_CPP_FILE, "cert_ctr50_cpp", Mandatory),
        case("cert-cpp-mem52", standard, "MEM52-CPP", CERT_CPP_FILE, "cert_mem52_cpp", Required),
        case("cert-cpp-err61", standard, "ERR61-CPP", CERT_CPP_FILE, "cert_err61_cpp", Required),
        case("cert-cpp-msc50", standard, "MSC50-CPP", CERT_CPP_FILE, "cert_msc50_cpp", Required),
        case("cert-cpp-oop51", standard, "OOP51-CPP", CERT_CPP_FILE, "cert_oop51_cpp", Required),
    ]
}

fn autosar_cases() -> Vec<ViolationCase> {
    use Severity::Required;
    let standard = Standard::AutosarCpp;
    vec![
        case("autosar-a0-1-1", standard, "A0-1-1", AUTOSAR_FILE, "autosar_a0_1_1", Required),
        case("autosar-a0-1-2", standard, "A0-1-2", AUTOSAR_FILE, "autosar_a0_1_2", Required),
        case("autosar-a2-10-1", standard, "A2-10-1", AUTOSAR_FILE, "autosar_a2_10_1", Required),
        case("autosar-a5-1-1", standard, "A5-1-1", AUTOSAR_FILE, "autosar_a5_1_1", Required),
        case("autosar-a7-1-5", standard, "A7-1-5", AUTOSAR_FILE, "autosar_a7_1_5", Required),
        // The A11-0-2 snippet is a struct definition, not a function.
        case_at_lines("autosar-a11-0-2", standard, "A11-0-2", AUTOSAR_FILE, 41, 44, Required),
        case("autosar-a15-1-2", standard, "A15-1-2", AUTOSAR_FILE, "autosar_a15_1_2", Required),
        case("autosar-a18-1-1", standard, "A18-1-1", AUTOSAR_FILE, "autosar_a18_1_1", Required),
        case("autosar-a18-5-1", standard, "A18-5-1", AUTOSAR_FILE, "autosar_a18_5_1", Required),
        case("autosar-m5-0-3", standard, "M5-0-3", AUTOSAR_FILE, "autosar_m5_0_3", Required),
        case("autosar-a5-2-2", standard, "A5-2-2", AUTOSAR_FILE, "autosar_a5_2_2", Required),
        case("autosar-a3-9-1", standard, "A3-9-1", AUTOSAR_FILE, "autosar_a3_9_1", Required),
        case("autosar-m6-4-1", standard, "M6-4-1", AUTOSAR_FILE, "autosar_m6_4_1", Required),
        case("autosar-a8-4-7", standard, "A8-4-7", AUTOSAR_FILE, "autosar_a8_4_7", Required),
    ]
}

impl Catalog {
    /// The builtin suite, in standard order.
    ///
    /// Ids are unique by construction (pinned by tests); no filesystem
    /// probing happens here so the suite can be listed from any directory.
    pub fn builtin() -> Catalog {
        let mut cases = Vec::new();
        cases.extend(misra_c_cases());
        cases.extend(cert_c_cases());
        cases.extend(misra_cpp_cases());
        cases.extend(cert_cpp_cases());
        cases.extend(autosar_cases());

        Catalog::from_static(cases)
    }
}
