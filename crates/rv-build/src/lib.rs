//! # rv-build
//!
//! Build adapter for the conformance harness.
//!
//! Each catalog source file is compiled into an exclusively-owned artifact
//! directory through the [`Compiler`] capability. A file that fails to
//! compile never fails the run: the failure is recorded on its
//! [`BuildArtifact`] and downstream verification resolves those cases to
//! BUILD_FAILED without invoking the analyzer.
//!
//! Builds are independent per translation unit and run across a bounded
//! worker pool; the artifact directory is deleted on every exit path
//! unless explicitly retained.

pub mod artifact;
pub mod batch;
pub mod compiler;

pub use artifact::{ArtifactDir, BuildArtifact};
pub use batch::{build_all, default_jobs};
pub use compiler::{Compiled, Compiler, CompilerConfig, SystemCompiler};
