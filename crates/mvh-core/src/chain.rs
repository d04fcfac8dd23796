//! # Test Chains
//!
//! A [`TestChain`] is one registered unit of work: a validator function
//! plus the ordered inputs it will be applied to. Chains are created
//! through the [`ChainConsumer`] capability inside
//! [`TestSuite::add`](crate::TestSuite::add), are immutable thereafter,
//! and are owned exclusively by the suite that created them.
//!
//! Chains over different value types coexist in one suite: the suite
//! stores them behind a crate-private execution trait, so the value type
//! is erased at registration time and never crosses the suite boundary.

use crate::input::InputWithDescription;
use crate::report::{ProblemReport, Reporter};

/// Type-erased execution surface the suite drives chains through.
pub(crate) trait Chain {
    /// Invoke the validator once per input, in input order, reporting
    /// into `report`.
    fn execute(&self, report: &mut ProblemReport);
}

/// One validator bound to the ordered inputs it runs against.
///
/// The validator receives `(description, value, reporter)` per input and
/// reports expected failures through the reporter. It is invoked only
/// with inputs from this chain's own list — never another chain's.
pub struct TestChain<T: 'static> {
    validator: Box<dyn Fn(&str, &T, &mut Reporter<'_>)>,
    inputs: Vec<InputWithDescription<T>>,
}

impl<T: 'static> TestChain<T> {
    /// Bind a validator to its inputs.
    pub fn new<V>(validator: V, inputs: Vec<InputWithDescription<T>>) -> Self
    where
        V: Fn(&str, &T, &mut Reporter<'_>) + 'static,
    {
        Self {
            validator: Box::new(validator),
            inputs,
        }
    }

    /// The inputs this chain will run against, in registration order.
    pub fn inputs(&self) -> &[InputWithDescription<T>] {
        &self.inputs
    }
}

impl<T: 'static> std::fmt::Debug for TestChain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestChain")
            .field("inputs", &self.inputs.len())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Chain for TestChain<T> {
    fn execute(&self, report: &mut ProblemReport) {
        for input in &self.inputs {
            let mut reporter = Reporter::new(report);
            (self.validator)(input.description(), input.value(), &mut reporter);
        }
    }
}

/// Chain-construction capability handed to [`TestSuite::add`] builders.
///
/// Each [`chain`](ChainConsumer::chain) call constructs exactly one
/// [`TestChain`] and appends it to the owning suite, preserving both the
/// order of `chain` calls and the order of the inputs passed to each —
/// report content depends on that order for reproducible output.
///
/// [`TestSuite::add`]: crate::TestSuite::add
pub struct ChainConsumer<'a> {
    chains: &'a mut Vec<Box<dyn Chain>>,
}

impl std::fmt::Debug for ChainConsumer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainConsumer")
            .field("chains", &self.chains.len())
            .finish()
    }
}

impl<'a> ChainConsumer<'a> {
    pub(crate) fn new(chains: &'a mut Vec<Box<dyn Chain>>) -> Self {
        Self { chains }
    }

    /// Register one chain: a validator and the inputs it applies to.
    ///
    /// The original variadic registration maps to an `IntoIterator` of
    /// inputs here; order is preserved. Duplicate descriptions across
    /// inputs or chains are legal and independent.
    pub fn chain<T, V, I>(&mut self, validator: V, inputs: I)
    where
        T: 'static,
        V: Fn(&str, &T, &mut Reporter<'_>) + 'static,
        I: IntoIterator<Item = InputWithDescription<T>>,
    {
        self.chains.push(Box::new(TestChain::new(
            validator,
            inputs.into_iter().collect(),
        )));
    }
}
