//! # mvh-runner — Model Validation Harness Driver
//!
//! Process-level plumbing around [`mvh_core`]: argument handling,
//! failure diagnostics, JSON report file lifecycle, and exit-code
//! computation. Generated test crates depend on this crate and call
//! [`main_with`] from their `main`, passing the generated registration
//! function; everything else — running, printing, writing or deleting
//! the report file, choosing the exit status — happens here.
//!
//! ## Contract
//!
//! - Exit status `0` when zero problems were reported, `1` otherwise.
//!   This is the sole pass/fail signal to calling automation.
//! - One optional positional argument: the report file path. On failure
//!   the problem report is written there as JSON; on success a stale
//!   file from a previous run is deleted. No argument, no file I/O.
//! - Unexpected failures (validator panic, serialization or file-system
//!   error) are fatal; only *reported* problems are aggregated.

pub mod driver;

pub use driver::{main_with, run_suite, RunnerArgs};
