//! # Introduction
//!
//! algotrace replays classical algorithms one observable moment at a time.
//! Each run produces a [`trace::Trace`]: an ordered list of steps, each
//! owning a snapshot of the algorithm's state, a narration message, the
//! pseudocode line it corresponds to and the variables worth showing. The
//! trace is then navigated forward and backward through a terminal UI built
//! with [ratatui](https://docs.rs/ratatui), or dumped as JSON.
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → Validator → Step generator → Trace → TUI / JSON
//! ```
//!
//! 1. [`validate`] and [`graph::validate`]: reject malformed input before any
//!    step is recorded, with a typed error from [`errors`].
//! 2. [`pipeline`]: the [`pipeline::Visualization`] trait every feature
//!    implements; `execute` runs validation then generation exactly once.
//! 3. [`trace`]: the step contract and the [`trace::Recorder`] that snapshots
//!    state at each recorded moment.
//! 4. [`ui`]: ratatui viewer; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Search: binary search.
//! Sorting: bubble, selection, insertion, merge, quick, heap, LSD radix.
//! Strings: KMP, Boyer-Moore (bad-character rule), longest common subsequence.
//! Graphs: Dijkstra, Kruskal (with union-find), Prim, topological sort.
//!
//! Every feature also exposes its plain algorithm (`binary_search`,
//! `kruskal`, `lcs`, ...) which returns only the final result.

pub mod constants;
pub mod errors;
pub mod graph;
pub mod pipeline;
pub mod search;
pub mod sorting;
pub mod strings;
pub mod trace;
pub mod ui;
pub mod validate;

pub use errors::{Error, ErrorKind};
pub use pipeline::{Output, Visualization};
pub use trace::{Recorder, Step, StepKind, Trace, Variable};
