//! Bounded-parallel batch builds.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::artifact::BuildArtifact;
use crate::compiler::{Compiler, CompilerConfig};

/// Default worker count for batch builds.
pub fn default_jobs() -> usize {
    num_cpus::get()
}

/// Compile every source into `out_dir`, at most `jobs` at a time.
///
/// Artifacts come back in input order regardless of completion order, and
/// a unit that fails to compile never aborts the batch: its failure lands
/// on its own artifact.
pub async fn build_all<C>(
    compiler: &Arc<C>,
    sources: &[PathBuf],
    out_dir: &Path,
    config: &CompilerConfig,
    jobs: usize,
) -> Vec<BuildArtifact>
where
    C: Compiler + 'static,
{
    let semaphore = Arc::new(Semaphore::new(jobs.max(1)));
    let mut handles = Vec::with_capacity(sources.len());

    for source in sources {
        let compiler = Arc::clone(compiler);
        let semaphore = Arc::clone(&semaphore);
        let source = source.clone();
        let out_dir = out_dir.to_path_buf();
        let config = config.clone();
        handles.push(tokio::spawn(async move {
            // The semaphore is never closed; a failed acquire only drops
            // the concurrency bound.
            let _permit = semaphore.acquire_owned().await.ok();
            let compiled = compiler.compile(&source, &out_dir, &config).await;
            BuildArtifact::from_compiled(source, compiled)
        }));
    }

    let mut artifacts = Vec::with_capacity(handles.len());
    for (handle, source) in handles.into_iter().zip(sources) {
        match handle.await {
            Ok(artifact) => artifacts.push(artifact),
            Err(_) => {
                tracing::warn!(source = %source.display(), "build task panicked");
                artifacts.push(BuildArtifact::failed(source.clone(), "build task panicked"));
            }
        }
    }
    artifacts
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use rv_core::BoxFuture;

    use crate::compiler::Compiled;

    /// Succeeds unless the source stem is listed as broken; even-length
    /// stems sleep briefly to scramble completion order.
    struct FakeCompiler {
        broken: Vec<&'static str>,
    }

    impl Compiler for FakeCompiler {
        fn compile(
            &self,
            source: &Path,
            out_dir: &Path,
            _config: &CompilerConfig,
        ) -> BoxFuture<'static, Compiled> {
            let stem = source
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            let object = out_dir.join(format!("{}.o", stem));
            let broken = self.broken.contains(&stem.as_str());
            let slow = stem.len() % 2 == 0;
            Box::pin(async move {
                if slow {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                }
                if broken {
                    Compiled::failure(format!("{}: synthetic error", stem))
                } else {
                    Compiled {
                        object: Some(object),
                        success: true,
                        diagnostics: Vec::new(),
                    }
                }
            })
        }
    }

    fn sources(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|name| PathBuf::from(*name)).collect()
    }

    #[tokio::test]
    async fn test_results_in_input_order() {
        let compiler = Arc::new(FakeCompiler { broken: vec![] });
        let sources = sources(&["aa.c", "b.c", "cccc.c", "d.c"]);
        let artifacts = build_all(
            &compiler,
            &sources,
            Path::new("/tmp"),
            &CompilerConfig::default(),
            2,
        )
        .await;

        let built: Vec<&Path> = artifacts.iter().map(|a| a.source_path.as_path()).collect();
        assert_eq!(built, sources.iter().map(PathBuf::as_path).collect::<Vec<_>>());
        assert!(artifacts.iter().all(|a| a.build_succeeded));
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_batch() {
        let compiler = Arc::new(FakeCompiler {
            broken: vec!["broken"],
        });
        let sources = sources(&["good.c", "broken.c", "fine.c"]);
        let artifacts = build_all(
            &compiler,
            &sources,
            Path::new("/tmp"),
            &CompilerConfig::default(),
            4,
        )
        .await;

        assert!(artifacts[0].build_succeeded);
        assert!(!artifacts[1].build_succeeded);
        assert!(artifacts[2].build_succeeded);
        assert_eq!(artifacts[1].first_diagnostic(), Some("broken: synthetic error"));
    }

    #[tokio::test]
    async fn test_single_job_still_completes_all() {
        let compiler = Arc::new(FakeCompiler { broken: vec![] });
        let sources = sources(&["a.c", "bb.c", "ccc.c"]);
        let artifacts = build_all(
            &compiler,
            &sources,
            Path::new("/tmp"),
            &CompilerConfig::default(),
            1,
        )
        .await;
        assert_eq!(artifacts.len(), 3);
    }

    #[test]
    fn test_default_jobs_is_positive() {
        assert!(default_jobs() >= 1);
    }
}
