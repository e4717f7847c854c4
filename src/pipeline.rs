//! Validate, instrument, return
//!
//! Every feature plugs into the same three-stage pipeline by implementing
//! [`Visualization`]: a validator that rejects malformed input, a step
//! generator that replays the algorithm, and the pseudocode the steps point
//! into. [`Visualization::execute`] sequences them.

use crate::trace::{StepKind, Trace};
use std::error::Error as StdError;

/// Generator result: the trace plus an optional derived artifact
#[derive(Debug, Clone, PartialEq)]
pub struct Output<K, S, A = ()> {
    pub trace: Trace<K, S>,
    pub artifact: A,
}

impl<K, S> Output<K, S, ()> {
    pub fn new(trace: Trace<K, S>) -> Self {
        Output {
            trace,
            artifact: (),
        }
    }
}

/// A replayable algorithm family
pub trait Visualization {
    /// Display name, also used as the tracing field
    const NAME: &'static str;

    type Input;
    type Kind: StepKind;
    type State: Clone;
    /// Computed once per run, e.g. a lookup table. `()` when there is none.
    type Artifact;
    type Error: StdError;

    /// Reject input the algorithm cannot run on. Stops at the first
    /// violated rule.
    fn validate(input: &Self::Input) -> Result<(), Self::Error>;

    /// Replay the algorithm on validated input
    fn generate(input: &Self::Input) -> Output<Self::Kind, Self::State, Self::Artifact>;

    /// Pseudocode listing that `Step::pseudocode_line` indexes into
    fn pseudocode(input: &Self::Input) -> &'static [&'static str];

    /// Validate, then generate exactly once
    fn execute(
        input: &Self::Input,
    ) -> Result<Output<Self::Kind, Self::State, Self::Artifact>, Self::Error> {
        let span = tracing::debug_span!("execute", algorithm = Self::NAME);
        let _guard = span.enter();

        if let Err(err) = Self::validate(input) {
            tracing::debug!(error = %err, "input rejected");
            return Err(err);
        }

        let output = Self::generate(input);
        tracing::debug!(steps = output.trace.len(), "trace generated");
        Ok(output)
    }
}
