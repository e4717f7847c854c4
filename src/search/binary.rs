//! Binary search over an inclusive `[l, r]` range
//!
//! The search recurses on the half that may still hold the target, with pivot
//! `q = floor((l + r) / 2)`, and gives up once `r < l`. The generator follows
//! the same recursion and records one step per comparison and per decision.

use crate::errors::ArrayError;
use crate::pipeline::{Output, Visualization};
use crate::trace::{Recorder, StepKind};
use crate::validate::{check_array, check_sorted};
use serde::Serialize;
use std::cmp::Ordering;

pub const PSEUDOCODE: &[&str] = &[
    "BinarySearch(A, l, r, x):",
    "  if r < l: return NOT_FOUND",
    "  q = floor((l + r) / 2)",
    "  if A[q] == x: return q",
    "  if A[q] > x: return BinarySearch(A, l, q - 1, x)",
    "  return BinarySearch(A, q + 1, r, x)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySearchInput {
    pub array: Vec<i64>,
    pub target: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinarySearchKind {
    Init,
    Compare,
    GoLeft,
    GoRight,
    Found,
    NotFound,
}

impl StepKind for BinarySearchKind {
    fn label(self) -> &'static str {
        match self {
            BinarySearchKind::Init => "init",
            BinarySearchKind::Compare => "compare",
            BinarySearchKind::GoLeft => "go_left",
            BinarySearchKind::GoRight => "go_right",
            BinarySearchKind::Found => "found",
            BinarySearchKind::NotFound => "not_found",
        }
    }

    fn is_initial(self) -> bool {
        self == BinarySearchKind::Init
    }

    fn is_terminal(self) -> bool {
        matches!(self, BinarySearchKind::Found | BinarySearchKind::NotFound)
    }
}

/// Search state at one moment. `high` may drop to -1 when the range empties
/// on the left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinarySearchState {
    pub array: Vec<i64>,
    pub target: i64,
    pub low: isize,
    pub high: isize,
    pub mid: Option<usize>,
    pub found: Option<usize>,
    /// Recursion depth of the active call, starting at 1
    pub depth: usize,
    pub comparisons: usize,
}

impl BinarySearchState {
    /// Whether index `i` is still inside the live range
    pub fn in_range(&self, i: usize) -> bool {
        let i = i as isize;
        self.low <= i && i <= self.high
    }
}

/// Plain recursive binary search. Returns the index of the first match the
/// recursion reaches.
pub fn binary_search(array: &[i64], target: i64) -> Option<usize> {
    fn search(array: &[i64], target: i64, l: isize, r: isize) -> Option<usize> {
        if r < l {
            return None;
        }
        let q = (l + r) / 2;
        match array[q as usize].cmp(&target) {
            Ordering::Equal => Some(q as usize),
            Ordering::Greater => search(array, target, l, q - 1),
            Ordering::Less => search(array, target, q + 1, r),
        }
    }

    search(array, target, 0, array.len() as isize - 1)
}

pub fn validate(input: &BinarySearchInput) -> Result<(), ArrayError> {
    check_array(&input.array)?;
    check_sorted(&input.array)
}

pub fn generate_steps(input: &BinarySearchInput) -> Recorder<BinarySearchKind, BinarySearchState> {
    let mut state = BinarySearchState {
        array: input.array.clone(),
        target: input.target,
        low: 0,
        high: input.array.len() as isize - 1,
        mid: None,
        found: None,
        depth: 1,
        comparisons: 0,
    };
    let mut rec = Recorder::new();

    rec.record(
        BinarySearchKind::Init,
        &state,
        format!(
            "Search for {} in {} sorted elements, range [{}, {}]",
            state.target,
            state.array.len(),
            state.low,
            state.high
        ),
    )
    .at_line(0)
    .var("l", state.low)
    .var("r", state.high)
    .var("x", state.target);

    search_step(&mut rec, &mut state);
    rec
}

fn search_step(
    rec: &mut Recorder<BinarySearchKind, BinarySearchState>,
    state: &mut BinarySearchState,
) {
    let (l, r) = (state.low, state.high);
    if r < l {
        state.mid = None;
        rec.record(
            BinarySearchKind::NotFound,
            state,
            format!(
                "Range [{}, {}] is empty: {} is not in the array",
                l, r, state.target
            ),
        )
        .at_line(1)
        .var("l", l)
        .var("r", r)
        .var("comparisons", state.comparisons);
        return;
    }

    let q = ((l + r) / 2) as usize;
    let value = state.array[q];
    state.mid = Some(q);
    state.comparisons += 1;
    rec.record(
        BinarySearchKind::Compare,
        state,
        format!(
            "Pivot q = floor(({} + {}) / 2) = {}; compare A[{}] = {} with {}",
            l, r, q, q, value, state.target
        ),
    )
    .at_line(2)
    .var("l", l)
    .var("r", r)
    .var("q", q)
    .var("A[q]", value);

    match value.cmp(&state.target) {
        Ordering::Equal => {
            state.found = Some(q);
            rec.record(
                BinarySearchKind::Found,
                state,
                format!(
                    "A[{}] = {} equals the target: found at index {} after {} comparison(s)",
                    q, value, q, state.comparisons
                ),
            )
            .at_line(3)
            .var("q", q)
            .var("comparisons", state.comparisons);
        }
        Ordering::Greater => {
            state.high = q as isize - 1;
            state.depth += 1;
            rec.record(
                BinarySearchKind::GoLeft,
                state,
                format!(
                    "A[{}] = {} > {}: continue in the left half [{}, {}]",
                    q, value, state.target, state.low, state.high
                ),
            )
            .at_line(4)
            .var("l", state.low)
            .var("r", state.high);
            search_step(rec, state);
        }
        Ordering::Less => {
            state.low = q as isize + 1;
            state.depth += 1;
            rec.record(
                BinarySearchKind::GoRight,
                state,
                format!(
                    "A[{}] = {} < {}: continue in the right half [{}, {}]",
                    q, value, state.target, state.low, state.high
                ),
            )
            .at_line(5)
            .var("l", state.low)
            .var("r", state.high);
            search_step(rec, state);
        }
    }
}

pub struct BinarySearch;

impl Visualization for BinarySearch {
    const NAME: &'static str = "binary search";

    type Input = BinarySearchInput;
    type Kind = BinarySearchKind;
    type State = BinarySearchState;
    type Artifact = ();
    type Error = ArrayError;

    fn validate(input: &Self::Input) -> Result<(), Self::Error> {
        validate(input)
    }

    fn generate(input: &Self::Input) -> Output<Self::Kind, Self::State> {
        Output::new(generate_steps(input).finish())
    }

    fn pseudocode(_input: &Self::Input) -> &'static [&'static str] {
        PSEUDOCODE
    }
}
