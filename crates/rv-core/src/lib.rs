//! # rv-core
//!
//! Core types for the rule-pack conformance harness.
//!
//! A *violation case* pairs one named rule from a coding standard with the
//! source file that deliberately breaks it. The harness compiles those
//! files, hands them to an external analyzer, and reconciles the analyzer's
//! findings against the catalog. This crate holds the shared vocabulary:
//!
//! - [`Standard`], [`ViolationCase`], [`ExpectedSymbol`], [`Severity`] —
//!   the catalog side
//! - [`Finding`] — one reported violation from the analyzer
//! - [`Outcome`], [`CaseState`] — the per-case state machine
//! - [`VerificationResult`], [`RunSummary`], [`RunReport`] — reporting

pub mod capability;
pub mod case;
pub mod finding;
pub mod outcome;
pub mod report;
pub mod standard;

pub use capability::BoxFuture;
pub use case::{ExpectedSymbol, Severity, ViolationCase};
pub use finding::Finding;
pub use outcome::{CaseState, Outcome};
pub use report::{RunReport, RunSummary, VerificationResult};
pub use standard::{ParseStandardError, Standard};
