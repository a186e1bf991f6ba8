//! `rv` - rule-pack conformance harness.
//!
//! # Usage
//!
//! ```bash
//! # Verify the repository catalog against the configured analyzer
//! rv run --catalog catalog/catalog.json
//!
//! # Only the MISRA C cases, with a tighter tool timeout
//! rv run --catalog catalog/catalog.json --rule-selector MISRA-C --timeout 30
//!
//! # Inspect the builtin suite without running anything
//! rv list --builtin
//! ```
//!
//! Exit codes: 0 when every selected case passes, 1 when any case is
//! MISSED, BUILD_FAILED or TOOL_ERROR, 2 on a configuration error before
//! any case runs.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rv_build::{default_jobs, CompilerConfig, SystemCompiler};
use rv_catalog::{Catalog, CatalogError, RuleSelector};
use rv_verify::{AnalyzerConfig, Harness, HarnessConfig, SystemAnalyzer};

/// Exit code for configuration errors (malformed catalog, bad arguments).
const CONFIG_EXIT: u8 = 2;

#[derive(Parser)]
#[command(name = "rv", version, about = "Rule-pack conformance harness")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the catalog sources, run the analyzer, report per-case outcomes
    Run {
        /// Catalog document to verify
        #[arg(long, required_unless_present = "builtin", conflicts_with = "builtin")]
        catalog: Option<PathBuf>,

        /// Use the builtin suite instead of a catalog document
        #[arg(long)]
        builtin: bool,

        /// Restrict the run to one standard (or `all`)
        #[arg(long, default_value = "all")]
        rule_selector: RuleSelector,

        /// Per-invocation timeout for the compiler and analyzer, in seconds
        #[arg(long, default_value_t = 60)]
        timeout: u64,

        /// Build worker count (defaults to the CPU count)
        #[arg(long)]
        jobs: Option<usize>,

        /// Keep the artifact directory after the run
        #[arg(long)]
        keep_artifacts: bool,

        /// C compiler program
        #[arg(long, default_value = "cc")]
        cc: String,

        /// C++ compiler program
        #[arg(long, default_value = "c++")]
        cxx: String,

        /// External analyzer program
        #[arg(long, default_value = "rule-analyzer")]
        analyzer: String,
    },

    /// List catalog cases without running anything
    List {
        /// Catalog document to list
        #[arg(long, required_unless_present = "builtin", conflicts_with = "builtin")]
        catalog: Option<PathBuf>,

        /// List the builtin suite
        #[arg(long)]
        builtin: bool,

        /// Restrict the listing to one standard (or `all`)
        #[arg(long, default_value = "all")]
        rule_selector: RuleSelector,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().cmd {
        Command::Run {
            catalog,
            builtin,
            rule_selector,
            timeout,
            jobs,
            keep_artifacts,
            cc,
            cxx,
            analyzer,
        } => {
            let catalog = match load_catalog(catalog.as_deref(), builtin) {
                Ok(catalog) => catalog,
                Err(error) => return config_failure(&error),
            };

            let timeout = Duration::from_secs(timeout);
            let config = HarnessConfig {
                compiler: CompilerConfig {
                    c_program: cc,
                    cpp_program: cxx,
                    timeout,
                    ..Default::default()
                },
                jobs: jobs.unwrap_or_else(default_jobs),
                keep_artifacts,
            };
            let analyzer = SystemAnalyzer::new(AnalyzerConfig {
                program: analyzer,
                timeout,
                ..Default::default()
            });

            let harness = Harness::new(SystemCompiler, analyzer, config);
            match harness.run(&catalog, &rule_selector).await {
                Ok(report) => {
                    print!("{}", report.format_report());
                    ExitCode::from(report.exit_code())
                }
                Err(error) => {
                    eprintln!("Error: {}", error);
                    ExitCode::from(CONFIG_EXIT)
                }
            }
        }

        Command::List {
            catalog,
            builtin,
            rule_selector,
        } => {
            let catalog = match load_catalog(catalog.as_deref(), builtin) {
                Ok(catalog) => catalog,
                Err(error) => return config_failure(&error),
            };

            for case in catalog.select(&rule_selector) {
                println!(
                    "{} {} {} {}",
                    case.id,
                    case.standard,
                    case.rule_code,
                    case.source_path.display()
                );
            }
            ExitCode::SUCCESS
        }
    }
}

fn load_catalog(path: Option<&Path>, builtin: bool) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => Catalog::load(path),
        // Clap guarantees --builtin is set when --catalog is absent.
        None => {
            debug_assert!(builtin);
            Ok(Catalog::builtin())
        }
    }
}

fn config_failure(error: &CatalogError) -> ExitCode {
    eprintln!("Error: {}", error);
    ExitCode::from(CONFIG_EXIT)
}
