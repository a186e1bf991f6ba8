//! Build artifacts and the scratch directory that owns them.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::compiler::Compiled;

/// One translation unit's build result.
///
/// Owned by the build adapter; replaced wholesale on rebuild.
#[derive(Debug, Clone)]
pub struct BuildArtifact {
    /// The source file this artifact was built from.
    pub source_path: PathBuf,
    /// Compiled object, when the build succeeded.
    pub object: Option<PathBuf>,
    pub build_succeeded: bool,
    /// Captured compiler output, in emission order.
    pub diagnostics: Vec<String>,
}

impl BuildArtifact {
    pub fn from_compiled(source_path: PathBuf, compiled: Compiled) -> Self {
        debug_assert!(compiled.success == compiled.object.is_some());
        Self {
            source_path,
            object: compiled.object,
            build_succeeded: compiled.success,
            diagnostics: compiled.diagnostics,
        }
    }

    /// An artifact for a unit that never produced compiler output.
    pub fn failed(source_path: PathBuf, diagnostic: impl Into<String>) -> Self {
        Self {
            source_path,
            object: None,
            build_succeeded: false,
            diagnostics: vec![diagnostic.into()],
        }
    }

    /// First captured diagnostic, for compact logging.
    pub fn first_diagnostic(&self) -> Option<&str> {
        self.diagnostics.first().map(String::as_str)
    }
}

/// Scratch directory holding one run's compiled objects.
///
/// Exclusively owned by the build adapter for the duration of the run.
/// Dropping it deletes the directory on every exit path, including build
/// failure; [`ArtifactDir::retain`] detaches it for post-run inspection.
#[derive(Debug)]
pub struct ArtifactDir {
    dir: TempDir,
}

impl ArtifactDir {
    pub fn create() -> std::io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("rv-artifacts-").tempdir()?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Keep the directory on disk instead of deleting it, returning its
    /// final location.
    pub fn retain(self) -> PathBuf {
        self.dir.into_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_dir_removed_on_drop() {
        let dir = ArtifactDir::create().unwrap();
        let path = dir.path().to_path_buf();
        assert!(path.is_dir());
        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn test_artifact_dir_retained_when_requested() {
        let dir = ArtifactDir::create().unwrap();
        let path = dir.retain();
        assert!(path.is_dir());
        std::fs::remove_dir_all(&path).unwrap();
    }

    #[test]
    fn test_failed_artifact_shape() {
        let artifact = BuildArtifact::failed(PathBuf::from("broken.c"), "did not spawn");
        assert!(!artifact.build_succeeded);
        assert!(artifact.object.is_none());
        assert_eq!(artifact.first_diagnostic(), Some("did not spawn"));
    }
}
