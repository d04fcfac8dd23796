//! # Problem Reports
//!
//! Aggregation types for validation failures. A validator that finds a
//! problem hands the [`Reporter`] a path string and a [`FailureOutput`]
//! (label → offending value); the suite accumulates these into a
//! [`ProblemReport`] keyed by path.
//!
//! ## Ordering and Collisions
//!
//! Both mappings iterate and serialize in sorted key order so that human
//! and JSON output are stable across runs. If two problems are reported
//! under the identical path, the later one wins — chains run in insertion
//! order and inputs in registration order, so "later" is deterministic.
//!
//! ## Serialized Form
//!
//! A report serializes transparently as a JSON object mirroring the
//! mapping: `{ "<path>": { "<label>": <value>, ... }, ... }`. An empty
//! report is the all-tests-passed signal and is never written to disk.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Error producing the machine-readable form of a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report could not be serialized to JSON.
    #[error("failed to serialize problem report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A labeled record of one validation failure: label → offending value.
///
/// Labels are free-form human-readable strings ("Value should be 'good'");
/// values capture whatever the validator wants to show, typically built
/// with [`serde_json::json!`] or [`serde_json::to_value`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FailureOutput {
    entries: BTreeMap<String, Value>,
}

impl FailureOutput {
    /// An empty failure record.
    pub fn new() -> Self {
        Self::default()
    }

    /// A failure record with a single label/value pair — the common case.
    pub fn with(label: impl Into<String>, value: Value) -> Self {
        let mut out = Self::new();
        out.insert(label, value);
        out
    }

    /// Attach another labeled value to this failure.
    pub fn insert(&mut self, label: impl Into<String>, value: Value) -> &mut Self {
        self.entries.insert(label.into(), value);
        self
    }

    /// Look up the value recorded under `label`.
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.entries.get(label)
    }

    /// Number of labeled values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no values have been attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over label/value pairs in sorted label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for FailureOutput {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The aggregated output of a suite run: path → [`FailureOutput`].
///
/// Paths are typically an input's description, or description plus a
/// sub-path for validators that descend into nested structure. An empty
/// report means every validator accepted every input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProblemReport {
    problems: BTreeMap<String, FailureOutput>,
}

impl ProblemReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure under `path`. Last write wins on collision.
    pub fn insert(&mut self, path: impl Into<String>, failure: FailureOutput) {
        self.problems.insert(path.into(), failure);
    }

    /// Look up the failure recorded under `path`.
    pub fn get(&self, path: &str) -> Option<&FailureOutput> {
        self.problems.get(path)
    }

    /// Number of distinct paths with a recorded failure.
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// True when no problems were reported — the overall-success signal.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Iterate over path/failure pairs in sorted path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FailureOutput)> {
        self.problems.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The machine-readable form written to the report file.
    ///
    /// Pretty-printed: the artifact is consumed by automation but read by
    /// humans when a pipeline goes red.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] if JSON serialization fails.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ProblemReport {
    /// Deeply-expanded human-readable listing: each path on its own line,
    /// followed by its labeled values, nested structure pretty-printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (path, failure)) in self.problems.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{path}")?;
            for (label, value) in failure.iter() {
                write!(f, "\n  {label}: {value:#}")?;
            }
        }
        Ok(())
    }
}

/// The problem-reporting capability handed to validators.
///
/// The Rust rendition of the original callback-style `onProblem` argument:
/// an explicit reporter passed by mutable reference, writing into the
/// accumulator owned by the in-progress run. A validator may report zero
/// or more problems per input, under the same or different paths; each is
/// recorded independently unless paths collide.
#[derive(Debug)]
pub struct Reporter<'a> {
    report: &'a mut ProblemReport,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(report: &'a mut ProblemReport) -> Self {
        Self { report }
    }

    /// Report one validation failure under `path`.
    pub fn problem(&mut self, path: impl Into<String>, failure: FailureOutput) {
        self.report.insert(path, failure);
    }
}
