//! # Test Suite
//!
//! An ordered collection of test chains with a run-and-report contract:
//! [`add`](TestSuite::add) registers chains before the run,
//! [`run`](TestSuite::run) executes every chain in insertion order and
//! returns the accumulated [`ProblemReport`].
//!
//! Execution is single-threaded and synchronous. The report accumulator
//! is owned by the in-progress `run` call and not exposed until it
//! returns, so `run` is idempotent for pure validators. A panicking
//! validator is not caught — expected failures go through the reporter;
//! unexpected ones abort the whole run.

use crate::chain::{Chain, ChainConsumer};
use crate::report::ProblemReport;

/// An ordered collection of test chains.
///
/// Populated via [`add`](TestSuite::add) — typically by generated
/// registration code, optionally by hand-written chains alongside it —
/// then executed once via [`run`](TestSuite::run).
///
/// ```
/// use mvh_core::{input, FailureOutput, Reporter, TestSuite};
/// use serde_json::json;
///
/// let mut suite = TestSuite::new();
/// suite.add(|consumer| {
///     consumer.chain(
///         |desc: &str, value: &&str, reporter: &mut Reporter<'_>| {
///             if *value != "good" {
///                 reporter.problem(desc, FailureOutput::with("Value should be 'good'", json!(value)));
///             }
///         },
///         vec![input("Good case", "good"), input("Bad case", "bad")],
///     );
/// });
///
/// let report = suite.run();
/// assert_eq!(report.len(), 1);
/// assert!(report.get("Bad case").is_some());
/// ```
#[derive(Default)]
pub struct TestSuite {
    chains: Vec<Box<dyn Chain>>,
}

impl TestSuite {
    /// An empty suite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register chains through a builder callback.
    ///
    /// `build` is invoked immediately with a [`ChainConsumer`]; each
    /// `consumer.chain(validator, inputs)` call appends one chain.
    /// Returns the suite itself so registration calls can be chained.
    /// No duplicate-description validation is performed — duplicates are
    /// legal and independent.
    pub fn add<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut ChainConsumer<'_>),
    {
        let mut consumer = ChainConsumer::new(&mut self.chains);
        build(&mut consumer);
        self
    }

    /// Number of registered chains.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// True if no chains have been registered.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Execute every chain in insertion order and collect the report.
    ///
    /// Each chain's validator is invoked once per input, in input order,
    /// with a reporter bound to the shared accumulator. Returns an empty
    /// report when no problems were reported — the all-tests-passed
    /// signal. Performs no I/O.
    pub fn run(&self) -> ProblemReport {
        let mut report = ProblemReport::new();
        for chain in &self.chains {
            chain.execute(&mut report);
        }
        report
    }
}

impl std::fmt::Debug for TestSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSuite")
            .field("chains", &self.chains.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::input;
    use crate::report::{FailureOutput, Reporter};
    use serde_json::json;

    #[test]
    fn empty_suite_runs_to_empty_report() {
        let suite = TestSuite::new();
        assert!(suite.is_empty());
        assert!(suite.run().is_empty());
    }

    #[test]
    fn add_returns_suite_for_fluent_registration() {
        let mut suite = TestSuite::new();
        suite
            .add(|consumer| {
                consumer.chain(
                    |_: &str, _: &i32, _: &mut Reporter<'_>| {},
                    vec![input("a", 1)],
                );
            })
            .add(|consumer| {
                consumer.chain(
                    |_: &str, _: &i32, _: &mut Reporter<'_>| {},
                    vec![input("b", 2)],
                );
            });
        assert_eq!(suite.len(), 2);
    }

    #[test]
    fn one_builder_may_register_several_chains() {
        let mut suite = TestSuite::new();
        suite.add(|consumer| {
            consumer.chain(
                |_: &str, _: &i32, _: &mut Reporter<'_>| {},
                vec![input("ints", 1)],
            );
            consumer.chain(
                |_: &str, _: &String, _: &mut Reporter<'_>| {},
                vec![input("strings", String::new())],
            );
        });
        assert_eq!(suite.len(), 2);
    }

    #[test]
    fn silent_validators_contribute_nothing() {
        let mut suite = TestSuite::new();
        suite.add(|consumer| {
            consumer.chain(
                |_: &str, _: &i32, _: &mut Reporter<'_>| {},
                vec![input("a", 1), input("b", 2), input("c", 3)],
            );
        });
        assert!(suite.run().is_empty());
    }

    #[test]
    fn one_problem_per_input_appears_exactly_once() {
        let mut suite = TestSuite::new();
        suite.add(|consumer| {
            consumer.chain(
                |desc: &str, value: &i32, reporter: &mut Reporter<'_>| {
                    reporter.problem(desc, FailureOutput::with("value", json!(value)));
                },
                vec![input("first", 10), input("second", 20)],
            );
        });
        let report = suite.run();
        assert_eq!(report.len(), 2);
        assert_eq!(report.get("first").unwrap().get("value"), Some(&json!(10)));
        assert_eq!(report.get("second").unwrap().get("value"), Some(&json!(20)));
    }

    #[test]
    fn validators_only_see_their_own_inputs() {
        // Chain A records every description it is invoked with; chain B's
        // inputs must never appear among them.
        let mut suite = TestSuite::new();
        suite.add(|consumer| {
            consumer.chain(
                |desc: &str, _: &i32, reporter: &mut Reporter<'_>| {
                    reporter.problem(format!("A:{desc}"), FailureOutput::new());
                },
                vec![input("a1", 1), input("a2", 2)],
            );
            consumer.chain(
                |desc: &str, _: &i32, reporter: &mut Reporter<'_>| {
                    reporter.problem(format!("B:{desc}"), FailureOutput::new());
                },
                vec![input("b1", 3)],
            );
        });
        let report = suite.run();
        let paths: Vec<&str> = report.iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["A:a1", "A:a2", "B:b1"]);
    }

    #[test]
    fn unrelated_chains_commute() {
        let reject_odd = |desc: &str, value: &i32, reporter: &mut Reporter<'_>| {
            if value % 2 != 0 {
                reporter.problem(desc, FailureOutput::with("must be even", json!(value)));
            }
        };
        let reject_empty = |desc: &str, value: &String, reporter: &mut Reporter<'_>| {
            if value.is_empty() {
                reporter.problem(desc, FailureOutput::with("must not be empty", json!(value)));
            }
        };

        let mut forward = TestSuite::new();
        forward.add(|consumer| {
            consumer.chain(reject_odd, vec![input("odd int", 3)]);
            consumer.chain(reject_empty, vec![input("empty string", String::new())]);
        });

        let mut backward = TestSuite::new();
        backward.add(|consumer| {
            consumer.chain(reject_empty, vec![input("empty string", String::new())]);
            consumer.chain(reject_odd, vec![input("odd int", 3)]);
        });

        assert_eq!(forward.run(), backward.run());
    }

    #[test]
    fn later_chain_wins_on_path_collision() {
        let mut suite = TestSuite::new();
        suite.add(|consumer| {
            consumer.chain(
                |_: &str, _: &i32, reporter: &mut Reporter<'_>| {
                    reporter.problem("X", FailureOutput::with("a", json!(1)));
                },
                vec![input("ignored", 0)],
            );
            consumer.chain(
                |_: &str, _: &i32, reporter: &mut Reporter<'_>| {
                    reporter.problem("X", FailureOutput::with("b", json!(2)));
                },
                vec![input("ignored", 0)],
            );
        });
        let report = suite.run();
        assert_eq!(report.len(), 1);
        let failure = report.get("X").unwrap();
        assert_eq!(failure.get("b"), Some(&json!(2)));
        assert_eq!(failure.get("a"), None);
    }

    #[test]
    fn duplicate_descriptions_register_independently() {
        // Two inputs with the same description: both are validated; the
        // report key collides and the later input wins, by design.
        let mut suite = TestSuite::new();
        suite.add(|consumer| {
            consumer.chain(
                |desc: &str, value: &i32, reporter: &mut Reporter<'_>| {
                    reporter.problem(desc, FailureOutput::with("value", json!(value)));
                },
                vec![input("same", 1), input("same", 2)],
            );
        });
        let report = suite.run();
        assert_eq!(report.len(), 1);
        assert_eq!(report.get("same").unwrap().get("value"), Some(&json!(2)));
    }

    #[test]
    fn run_is_idempotent_for_pure_validators() {
        let mut suite = TestSuite::new();
        suite.add(|consumer| {
            consumer.chain(
                |desc: &str, value: &String, reporter: &mut Reporter<'_>| {
                    if value != "good" {
                        reporter.problem(
                            desc,
                            FailureOutput::with("Value should be 'good'", json!(value)),
                        );
                    }
                },
                vec![
                    input("Good case", String::from("good")),
                    input("Bad case", String::from("bad")),
                ],
            );
        });
        assert_eq!(suite.run(), suite.run());
    }

    #[test]
    fn heterogeneous_value_types_in_one_suite() {
        #[derive(Debug)]
        struct Generated {
            field: u32,
        }

        let mut suite = TestSuite::new();
        suite.add(|consumer| {
            consumer.chain(
                |desc: &str, value: &Generated, reporter: &mut Reporter<'_>| {
                    if value.field == 0 {
                        reporter.problem(desc, FailureOutput::with("field must be set", json!(0)));
                    }
                },
                vec![
                    input("populated", Generated { field: 7 }),
                    input("unset", Generated { field: 0 }),
                ],
            );
            consumer.chain(
                |desc: &str, value: &bool, reporter: &mut Reporter<'_>| {
                    if !value {
                        reporter.problem(desc, FailureOutput::with("expected true", json!(false)));
                    }
                },
                vec![input("flag", false)],
            );
        });
        let report = suite.run();
        assert_eq!(report.len(), 2);
        assert!(report.get("unset").is_some());
        assert!(report.get("flag").is_some());
    }
}
