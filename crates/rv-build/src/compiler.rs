//! The compiler capability and its system implementation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::process::Command;

use rv_core::BoxFuture;

/// Compiler invocation settings.
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Program for C translation units.
    pub c_program: String,
    /// Program for C++ translation units.
    pub cpp_program: String,
    /// Flags passed before the source file. Warnings are suppressed by
    /// default: the analyzer, not the compiler, is the detector under test.
    pub args: Vec<String>,
    /// Per-invocation timeout.
    pub timeout: Duration,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            c_program: "cc".to_string(),
            cpp_program: "c++".to_string(),
            args: vec!["-c".to_string(), "-w".to_string()],
            timeout: Duration::from_secs(60),
        }
    }
}

impl CompilerConfig {
    /// Pick the toolchain program for a source file by extension.
    pub fn program_for(&self, source: &Path) -> &str {
        let is_cpp = source
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| matches!(ext, "cpp" | "cc" | "cxx" | "C"));
        if is_cpp {
            &self.cpp_program
        } else {
            &self.c_program
        }
    }
}

/// Output of one compiler invocation.
///
/// Failures are data: spawn errors, non-zero exits and timeouts all come
/// back as `success = false` with diagnostics attached, so one broken unit
/// cannot unwind the batch.
#[derive(Debug, Clone)]
pub struct Compiled {
    /// Path to the object file, when compilation succeeded.
    pub object: Option<PathBuf>,
    pub success: bool,
    /// Compiler output lines, in emission order.
    pub diagnostics: Vec<String>,
}

impl Compiled {
    pub fn failure(diagnostic: impl Into<String>) -> Self {
        Self {
            object: None,
            success: false,
            diagnostics: vec![diagnostic.into()],
        }
    }
}

/// Opaque compiler collaborator.
///
/// Tests substitute deterministic fakes; production uses [`SystemCompiler`].
/// The returned future owns its inputs so batch builds can be spawned onto
/// the runtime.
pub trait Compiler: Send + Sync {
    /// Compile one translation unit into `out_dir`.
    fn compile(
        &self,
        source: &Path,
        out_dir: &Path,
        config: &CompilerConfig,
    ) -> BoxFuture<'static, Compiled>;
}

/// Invokes the system toolchain as a subprocess.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCompiler;

impl Compiler for SystemCompiler {
    fn compile(
        &self,
        source: &Path,
        out_dir: &Path,
        config: &CompilerConfig,
    ) -> BoxFuture<'static, Compiled> {
        let source = source.to_path_buf();
        let out_dir = out_dir.to_path_buf();
        let config = config.clone();
        Box::pin(async move { compile_system(&source, &out_dir, &config).await })
    }
}

async fn compile_system(source: &Path, out_dir: &Path, config: &CompilerConfig) -> Compiled {
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("unit");
    let object = out_dir.join(format!("{}.o", stem));

    let program = config.program_for(source);
    let mut cmd = Command::new(program);
    cmd.args(&config.args)
        .arg(source)
        .arg("-o")
        .arg(&object);

    let result = tokio::time::timeout(config.timeout, cmd.output()).await;

    match result {
        Ok(Ok(output)) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let diagnostics = collect_diagnostics(&stderr);
            if output.status.success() {
                Compiled {
                    object: Some(object),
                    success: true,
                    diagnostics,
                }
            } else {
                tracing::debug!(source = %source.display(), "compilation failed");
                Compiled {
                    object: None,
                    success: false,
                    diagnostics,
                }
            }
        }
        Ok(Err(e)) => Compiled::failure(format!("failed to run {}: {}", program, e)),
        Err(_) => {
            // Timed-out builds may leave a partial object behind.
            let _ = tokio::fs::remove_file(&object).await;
            Compiled::failure(format!("timeout after {:?}", config.timeout))
        }
    }
}

/// Keep non-empty compiler output lines, in order.
fn collect_diagnostics(stderr: &str) -> Vec<String> {
    stderr
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}
