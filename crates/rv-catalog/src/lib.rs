//! # rv-catalog
//!
//! The authoritative list of rule/snippet pairs.
//!
//! A catalog is loaded once from a JSON document (or taken from the builtin
//! suite), validated, and never mutated afterwards. Iteration order is the
//! document order, so reports are reproducible run to run. Validation is
//! fatal: a malformed catalog aborts before any case runs.

pub mod builtin;
pub mod catalog;
pub mod selector;

pub use catalog::{Catalog, CatalogError};
pub use selector::{ParseSelectorError, RuleSelector};
