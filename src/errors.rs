//! Validation error types
//!
//! Every failure in this crate is raised by a validator before any step is
//! recorded. Errors are grouped by the shape of input they reject:
//! - [`ArrayError`]: search and sort inputs
//! - [`TextError`]: pattern matching and sequence alignment inputs
//! - [`GraphError`]: directed and undirected graph inputs
//!
//! Callers match on [`ErrorKind`] to pick a targeted message; the `Display`
//! text of each error is already human readable.

use serde::Serialize;
use thiserror::Error;

/// Caller-visible error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    InvalidArray,
    InvalidInput,
    InvalidGraph,
    InvalidReference,
}

impl ErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::InvalidArray => "invalid-array",
            ErrorKind::InvalidInput => "invalid-input",
            ErrorKind::InvalidGraph => "invalid-graph",
            ErrorKind::InvalidReference => "invalid-reference",
        }
    }
}

/// Rejected array input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// The array has no elements
    #[error("array must contain at least one element")]
    Empty,

    /// The array exceeds the visualization cap
    #[error("array has {len} elements, at most {max} are supported")]
    TooLong { len: usize, max: usize },

    /// An element is smaller than its predecessor
    #[error("array must be sorted: element {index} is smaller than the element before it")]
    Unsorted { index: usize },

    /// Radix sort only handles non-negative integers
    #[error("element {index} is negative ({value}); only non-negative integers can be radix sorted")]
    NegativeValue { index: usize, value: i64 },

    /// Radix base outside the supported range
    #[error("base {base} is not supported, expected a value between {min} and {max}")]
    InvalidBase { base: u32, min: u32, max: u32 },
}

impl ArrayError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArray
    }
}

/// Rejected text, pattern or sequence input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("text must not be empty")]
    EmptyText,

    #[error("pattern must not be empty")]
    EmptyPattern,

    #[error("text has {len} characters, at most {max} are supported")]
    TextTooLong { len: usize, max: usize },

    #[error("pattern has {len} characters, at most {max} are supported")]
    PatternTooLong { len: usize, max: usize },

    /// Pattern cannot fit inside the text
    #[error("pattern ({pattern} characters) is longer than the text ({text} characters)")]
    PatternLongerThanText { pattern: usize, text: usize },
}

impl TextError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// Rejected graph input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph must contain at least one node")]
    NoNodes,

    #[error("graph has {count} nodes, at most {max} are supported")]
    TooManyNodes { count: usize, max: usize },

    #[error("node {id} is declared more than once")]
    DuplicateNode { id: u32 },

    /// An edge references a node that is not declared
    #[error("edge {from} -> {to} references unknown node {missing}")]
    UnknownEndpoint { from: u32, to: u32, missing: u32 },

    #[error("self-loop on node {id} is not allowed")]
    SelfLoop { id: u32 },

    #[error("edge between {from} and {to} is declared more than once")]
    DuplicateEdge { from: u32, to: u32 },

    #[error("edge {from} -> {to} has weight {weight}, magnitudes up to {max} are supported")]
    WeightTooLarge {
        from: u32,
        to: u32,
        weight: i64,
        max: i64,
    },

    /// Shortest paths need non-negative weights
    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight { from: u32, to: u32, weight: i64 },

    /// A directed cycle makes an ordering impossible
    #[error("graph contains a cycle through node {id}")]
    Cycle { id: u32 },

    /// A spanning tree needs every node reachable
    #[error("graph is disconnected: node {id} cannot be reached")]
    Disconnected { id: u32 },

    /// The start node is not part of the graph
    #[error("start node {id} does not exist in the graph")]
    UnknownSource { id: u32 },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::UnknownSource { .. } => ErrorKind::InvalidReference,
            _ => ErrorKind::InvalidGraph,
        }
    }
}

/// Any validation failure, for callers that drive several features
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Array(#[from] ArrayError),

    #[error(transparent)]
    Text(#[from] TextError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Array(e) => e.kind(),
            Error::Text(e) => e.kind(),
            Error::Graph(e) => e.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_map_to_labels() {
        assert_eq!(ArrayError::Empty.kind().label(), "invalid-array");
        assert_eq!(TextError::EmptyPattern.kind().label(), "invalid-input");
        assert_eq!(GraphError::Cycle { id: 1 }.kind(), ErrorKind::InvalidGraph);
        assert_eq!(
            GraphError::UnknownSource { id: 9 }.kind(),
            ErrorKind::InvalidReference
        );
    }

    #[test]
    fn test_umbrella_keeps_kind_and_message() {
        let err: Error = ArrayError::Unsorted { index: 3 }.into();
        assert_eq!(err.kind(), ErrorKind::InvalidArray);
        assert_eq!(
            err.to_string(),
            "array must be sorted: element 3 is smaller than the element before it"
        );
    }
}
