//! Step recording for algorithm replay
//!
//! This module defines the contract every step generator produces:
//! - [`StepKind`]: the closed tag set a feature uses to classify moments
//! - [`Step`]: one recorded moment, owning a copy of the algorithm state
//! - [`Recorder`]: append-only builder used while an algorithm runs
//! - [`Trace`]: the finished, read-only sequence handed to callers
//!
//! # Snapshot discipline
//!
//! [`Recorder::record`] takes the live state by reference and clones it into
//! the new step. Generators keep mutating their own working copy afterwards;
//! steps already recorded never observe those mutations.

use serde::Serialize;
use std::fmt;
use std::ops::Index;

/// Classification of a recorded moment.
pub trait StepKind: Copy + Eq + fmt::Debug + Serialize {
    /// Short snake_case tag, e.g. `"compare"`.
    fn label(self) -> &'static str;

    /// Whether a trace may start with this kind.
    fn is_initial(self) -> bool;

    /// Whether a trace may end with this kind.
    fn is_terminal(self) -> bool;
}

/// A named value shown next to the pseudocode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub value: String,
}

/// One observable moment of an algorithm run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step<K, S> {
    #[serde(rename = "type")]
    pub kind: K,
    pub state: S,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pseudocode_line: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<Variable>,
}

impl<K, S> Step<K, S> {
    /// Attach the pseudocode line this moment corresponds to
    pub fn at_line(&mut self, line: usize) -> &mut Self {
        self.pseudocode_line = Some(line);
        self
    }

    /// Append a variable binding; bindings keep insertion order
    pub fn var(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        self.variables.push(Variable {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Look up a variable's rendered value by name
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    }
}

/// Append-only step builder owned by a running generator
#[derive(Debug)]
pub struct Recorder<K, S> {
    steps: Vec<Step<K, S>>,
}

impl<K: StepKind, S: Clone> Recorder<K, S> {
    pub fn new() -> Self {
        Recorder { steps: Vec::new() }
    }

    /// Record a moment. The state is copied here, so later changes to the
    /// caller's working state do not reach this step.
    pub fn record(&mut self, kind: K, state: &S, message: impl Into<String>) -> &mut Step<K, S> {
        let index = self.steps.len();
        self.steps.push(Step {
            kind,
            state: state.clone(),
            message: message.into(),
            pseudocode_line: None,
            variables: Vec::new(),
        });
        &mut self.steps[index]
    }

    /// Number of steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the recording into a read-only trace
    pub fn finish(self) -> Trace<K, S> {
        debug_assert!(
            self.steps.first().is_some_and(|s| s.kind.is_initial()),
            "trace must start with an initial step"
        );
        debug_assert!(
            self.steps.last().is_some_and(|s| s.kind.is_terminal()),
            "trace must end with a terminal step"
        );
        Trace { steps: self.steps }
    }
}

impl<K: StepKind, S: Clone> Default for Recorder<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Finished, totally ordered sequence of steps
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace<K, S> {
    steps: Vec<Step<K, S>>,
}

impl<K: StepKind, S> Trace<K, S> {
    /// Get a step by position
    pub fn get(&self, index: usize) -> Option<&Step<K, S>> {
        self.steps.get(index)
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&Step<K, S>> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step<K, S>> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<K, S>> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[Step<K, S>] {
        &self.steps
    }

    /// The tag sequence, useful for comparing runs
    pub fn kinds(&self) -> Vec<K> {
        self.steps.iter().map(|s| s.kind).collect()
    }

    /// Count the steps carrying a given tag
    pub fn count(&self, kind: K) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    /// Consume the trace, yielding owned steps
    pub fn into_steps(self) -> Vec<Step<K, S>> {
        self.steps
    }
}

impl<K, S> Index<usize> for Trace<K, S> {
    type Output = Step<K, S>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a, K: StepKind, S> IntoIterator for &'a Trace<K, S> {
    type Item = &'a Step<K, S>;
    type IntoIter = std::slice::Iter<'a, Step<K, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Tick {
        Start,
        Bump,
        Done,
    }

    impl StepKind for Tick {
        fn label(self) -> &'static str {
            match self {
                Tick::Start => "start",
                Tick::Bump => "bump",
                Tick::Done => "done",
            }
        }

        fn is_initial(self) -> bool {
            self == Tick::Start
        }

        fn is_terminal(self) -> bool {
            self == Tick::Done
        }
    }

    #[test]
    fn test_recorded_state_is_detached_from_live_state() {
        let mut live = vec![1, 2, 3];
        let mut rec = Recorder::new();
        rec.record(Tick::Start, &live, "start");
        live.push(4);
        rec.record(Tick::Bump, &live, "bump");
        live.clear();
        rec.record(Tick::Done, &live, "done");

        let trace = rec.finish();
        assert_eq!(trace[0].state, vec![1, 2, 3]);
        assert_eq!(trace[1].state, vec![1, 2, 3, 4]);
        assert!(trace[2].state.is_empty());
    }

    #[test]
    fn test_variables_keep_insertion_order() {
        let mut rec: Recorder<Tick, ()> = Recorder::new();
        rec.record(Tick::Start, &(), "start")
            .at_line(2)
            .var("z", 1)
            .var("a", "two");
        rec.record(Tick::Done, &(), "done");
        let trace = rec.finish();

        let names: Vec<&str> = trace[0].variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
        assert_eq!(trace[0].variable("a"), Some("two"));
        assert_eq!(trace[0].pseudocode_line, Some(2));
        assert_eq!(trace.kinds(), vec![Tick::Start, Tick::Done]);
    }

    #[test]
    fn test_serializes_kind_as_type() {
        let mut rec: Recorder<Tick, u8> = Recorder::new();
        rec.record(Tick::Start, &7, "start");
        rec.record(Tick::Done, &7, "done");
        let json = serde_json::to_value(rec.finish()).unwrap();
        assert_eq!(json[0]["type"], "start");
        assert_eq!(json[1]["state"], 7);
        assert!(json[0].get("pseudocode_line").is_none());
    }
}
