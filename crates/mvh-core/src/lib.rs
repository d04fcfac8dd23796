//! # mvh-core — Model Validation Harness Engine
//!
//! Minimal test orchestration for generated data-model types. Code
//! generators emit model types plus registration code that feeds test
//! cases into a [`TestSuite`]; the suite runs externally-supplied
//! validator functions against every case and aggregates failures into a
//! [`ProblemReport`] keyed by a hierarchical path.
//!
//! ## Composition Model
//!
//! - [`InputWithDescription`] — one value under test with its label.
//! - [`TestChain`] — one validator bound to the inputs it runs against.
//! - [`TestSuite`] — ordered chains; `add` to register, `run` to execute.
//! - [`Reporter`] / [`FailureOutput`] / [`ProblemReport`] — problem
//!   reporting and aggregation.
//!
//! ## What This Is Not
//!
//! Not a general-purpose test framework: no discovery, no parallelism,
//! no assertion DSL. Validators are supplied by the caller; the harness
//! only orchestrates and reports. Expected failures flow through the
//! reporter — a panicking validator aborts the run, deliberately.

pub mod chain;
pub mod input;
pub mod report;
pub mod suite;

pub use chain::{ChainConsumer, TestChain};
pub use input::{input, InputWithDescription};
pub use report::{FailureOutput, ProblemReport, ReportError, Reporter};
pub use suite::TestSuite;
