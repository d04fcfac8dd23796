//! # Suite Driver
//!
//! The linear run-and-report procedure around a populated [`TestSuite`]:
//! run every chain, print failures to a diagnostic stream, maintain the
//! JSON report file, and compute the process exit code.
//!
//! The pieces are split for testability: [`run_suite`] takes the report
//! path and diagnostic stream as plain arguments and returns the exit
//! code, so the whole contract is exercised without spawning a process.
//! [`main_with`] is the thin process-facing wrapper that parses real
//! arguments, initializes tracing, and converts the result into an
//! [`ExitCode`].

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mvh_core::TestSuite;

/// Model validation test runner.
///
/// Runs every registered validation chain against its inputs. On failure,
/// prints a listing of every problem and exits nonzero; when a report
/// path is given, also writes the problems as JSON there (and deletes a
/// stale file from a previous run on success, so downstream tooling never
/// picks up outdated failures).
#[derive(Parser, Debug)]
#[command(name = "model-tests", about, long_about = None)]
pub struct RunnerArgs {
    /// Path for the JSON problem report. Written on failure, deleted on
    /// success. Omitting it disables file output entirely.
    pub report: Option<PathBuf>,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Run the suite and report, returning the process exit code.
///
/// - Non-empty report: writes the deeply-expanded listing to
///   `diagnostics`, writes the JSON report file if a path was given
///   (overwriting any previous content), and returns `1`.
/// - Empty report: deletes a stale report file if one exists at the
///   given path, and returns `0`. A missing path is never an error —
///   it only disables file output.
///
/// # Errors
///
/// Serialization and file-system failures propagate; there is no
/// partial-report recovery. A panicking validator aborts before any
/// reporting happens — expected failures must flow through the reporter.
pub fn run_suite(
    suite: &TestSuite,
    report_path: Option<&Path>,
    diagnostics: &mut dyn Write,
) -> Result<u8> {
    tracing::debug!(chains = suite.len(), "running validation suite");
    let report = suite.run();

    if report.is_empty() {
        if let Some(path) = report_path {
            remove_stale_report(path)?;
        }
        tracing::info!(chains = suite.len(), "all validations passed");
        return Ok(0);
    }

    writeln!(diagnostics, "Test failures:")?;
    writeln!(diagnostics, "{report}")?;

    if let Some(path) = report_path {
        let json = report
            .to_json()
            .context("failed to serialize problem report")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write problem report: {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            problems = report.len(),
            "wrote problem report"
        );
    }

    Ok(1)
}

/// Delete a report file left over from a previous failing run.
fn remove_stale_report(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("failed to remove stale report: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "removed stale problem report");
    }
    Ok(())
}

/// Process-facing entry point for generated test binaries.
///
/// Parses real process arguments, initializes tracing from the verbosity
/// level, builds a [`TestSuite`], hands it to `register` (the generated
/// registration code, plus any hand-written chains), then runs and
/// reports. Driver errors are logged and mapped to exit code 1.
///
/// A generated consumer crate's `main` is one line:
///
/// ```no_run
/// use std::process::ExitCode;
///
/// fn main() -> ExitCode {
///     mvh_runner::main_with(|suite| {
///         // generated_tests::register(suite);
///
///         // Hand-written chains can be added alongside:
///         // suite.add(|consumer| consumer.chain(validator, inputs));
///         let _ = suite;
///     })
/// }
/// ```
pub fn main_with<F>(register: F) -> ExitCode
where
    F: FnOnce(&mut TestSuite),
{
    let args = RunnerArgs::parse();

    let filter = match args.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut suite = TestSuite::new();
    register(&mut suite);

    match run_suite(&suite, args.report.as_deref(), &mut io::stderr()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
