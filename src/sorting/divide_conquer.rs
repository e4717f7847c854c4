//! Divide-and-conquer sorts: top-down merge sort and Lomuto quicksort
//!
//! Both record the recursion stack at every step so a viewer can show which
//! subarray each call owns without replaying earlier steps.

use crate::errors::ArrayError;
use crate::pipeline::{Output, Visualization};
use crate::trace::{Recorder, StepKind};
use crate::validate::check_array;
use serde::Serialize;
use std::collections::BTreeSet;

pub const MERGE_PSEUDOCODE: &[&str] = &[
    "MergeSort(A, lo, hi):",
    "  if lo >= hi: return",
    "  mid = floor((lo + hi) / 2)",
    "  MergeSort(A, lo, mid); MergeSort(A, mid + 1, hi)",
    "  L = A[lo..mid]; R = A[mid+1..hi]",
    "  while L and R are not exhausted:",
    "    if L[i] <= R[j]: A[k++] = L[i++]",
    "    else: A[k++] = R[j++]",
    "  copy the rest of L or R into A",
];

pub const QUICK_PSEUDOCODE: &[&str] = &[
    "QuickSort(A, lo, hi):",
    "  if lo >= hi: return",
    "  pivot = A[hi]; i = lo",
    "  for j = lo to hi - 1:",
    "    if A[j] < pivot:",
    "      swap A[i], A[j]; i = i + 1",
    "  swap A[i], A[hi]",
    "  QuickSort(A, lo, i - 1); QuickSort(A, i + 1, hi)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DivideConquerAlgorithm {
    Merge,
    Quick,
}

impl DivideConquerAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            DivideConquerAlgorithm::Merge => "merge sort",
            DivideConquerAlgorithm::Quick => "quicksort",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivideConquerSortInput {
    pub algorithm: DivideConquerAlgorithm,
    pub array: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DivideConquerKind {
    Init,
    Divide,
    Compare,
    MergeWrite,
    Merged,
    Pivot,
    Swap,
    Partitioned,
    Complete,
}

impl StepKind for DivideConquerKind {
    fn label(self) -> &'static str {
        match self {
            DivideConquerKind::Init => "init",
            DivideConquerKind::Divide => "divide",
            DivideConquerKind::Compare => "compare",
            DivideConquerKind::MergeWrite => "merge_write",
            DivideConquerKind::Merged => "merged",
            DivideConquerKind::Pivot => "pivot",
            DivideConquerKind::Swap => "swap",
            DivideConquerKind::Partitioned => "partitioned",
            DivideConquerKind::Complete => "complete",
        }
    }

    fn is_initial(self) -> bool {
        self == DivideConquerKind::Init
    }

    fn is_terminal(self) -> bool {
        self == DivideConquerKind::Complete
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivideConquerState {
    pub algorithm: DivideConquerAlgorithm,
    pub array: Vec<i64>,
    /// Inclusive `(lo, hi)` ranges of the active calls, outermost first
    pub stack: Vec<(usize, usize)>,
    pub compare: Option<(usize, usize)>,
    pub swap: Option<(usize, usize)>,
    pub pivot: Option<usize>,
    /// Merge buffers and their read cursors
    pub left: Vec<i64>,
    pub right: Vec<i64>,
    pub left_index: Option<usize>,
    pub right_index: Option<usize>,
    pub write: Option<usize>,
    /// Indices holding their final value
    pub sorted: BTreeSet<usize>,
    pub comparisons: usize,
    pub writes: usize,
    pub swaps: usize,
}

impl DivideConquerState {
    fn new(algorithm: DivideConquerAlgorithm, array: &[i64]) -> Self {
        DivideConquerState {
            algorithm,
            array: array.to_vec(),
            stack: Vec::new(),
            compare: None,
            swap: None,
            pivot: None,
            left: Vec::new(),
            right: Vec::new(),
            left_index: None,
            right_index: None,
            write: None,
            sorted: BTreeSet::new(),
            comparisons: 0,
            writes: 0,
            swaps: 0,
        }
    }

    /// Range owned by the innermost active call
    pub fn active_range(&self) -> Option<(usize, usize)> {
        self.stack.last().copied()
    }

    fn clear_marks(&mut self) {
        self.compare = None;
        self.swap = None;
        self.write = None;
    }

    fn clear_buffers(&mut self) {
        self.left.clear();
        self.right.clear();
        self.left_index = None;
        self.right_index = None;
    }
}

pub fn merge_sort(array: &[i64]) -> Vec<i64> {
    if array.len() <= 1 {
        return array.to_vec();
    }
    let mid = (array.len() - 1) / 2;
    let left = merge_sort(&array[..=mid]);
    let right = merge_sort(&array[mid + 1..]);
    let mut merged = Vec::with_capacity(array.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

pub fn quick_sort(array: &[i64]) -> Vec<i64> {
    fn sort(a: &mut [i64]) {
        if a.len() <= 1 {
            return;
        }
        let hi = a.len() - 1;
        let pivot = a[hi];
        let mut i = 0;
        for j in 0..hi {
            if a[j] < pivot {
                a.swap(i, j);
                i += 1;
            }
        }
        a.swap(i, hi);
        let (left, right) = a.split_at_mut(i);
        sort(left);
        sort(&mut right[1..]);
    }

    let mut a = array.to_vec();
    sort(&mut a);
    a
}

pub fn validate(input: &DivideConquerSortInput) -> Result<(), ArrayError> {
    check_array(&input.array)
}

type Rec = Recorder<DivideConquerKind, DivideConquerState>;

pub fn generate_steps(input: &DivideConquerSortInput) -> Rec {
    let mut state = DivideConquerState::new(input.algorithm, &input.array);
    let mut rec = Recorder::new();
    let n = state.array.len();

    rec.record(
        DivideConquerKind::Init,
        &state,
        format!("Sort {} elements with {}", n, input.algorithm.name()),
    )
    .at_line(0)
    .var("lo", 0)
    .var("hi", n - 1);

    match input.algorithm {
        DivideConquerAlgorithm::Merge => merge_range(&mut rec, &mut state, 0, n - 1),
        DivideConquerAlgorithm::Quick => quick_range(&mut rec, &mut state, 0, n - 1),
    }

    state.clear_marks();
    state.clear_buffers();
    state.pivot = None;
    state.stack.clear();
    state.sorted = (0..n).collect();
    rec.record(
        DivideConquerKind::Complete,
        &state,
        format!(
            "Sorted after {} comparison(s), {} write(s) and {} swap(s)",
            state.comparisons, state.writes, state.swaps
        ),
    )
    .var("comparisons", state.comparisons);
    rec
}

fn merge_range(rec: &mut Rec, state: &mut DivideConquerState, lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }
    state.stack.push((lo, hi));
    state.clear_marks();
    let mid = (lo + hi) / 2;
    rec.record(
        DivideConquerKind::Divide,
        state,
        format!(
            "Split A[{}..{}] into A[{}..{}] and A[{}..{}]",
            lo,
            hi,
            lo,
            mid,
            mid + 1,
            hi
        ),
    )
    .at_line(2)
    .var("lo", lo)
    .var("mid", mid)
    .var("hi", hi);

    merge_range(rec, state, lo, mid);
    merge_range(rec, state, mid + 1, hi);
    merge(rec, state, lo, mid, hi);
    state.stack.pop();
}

fn merge(rec: &mut Rec, state: &mut DivideConquerState, lo: usize, mid: usize, hi: usize) {
    state.left = state.array[lo..=mid].to_vec();
    state.right = state.array[mid + 1..=hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < state.left.len() && j < state.right.len() {
        state.clear_marks();
        state.left_index = Some(i);
        state.right_index = Some(j);
        state.comparisons += 1;
        let (l, r) = (state.left[i], state.right[j]);
        rec.record(
            DivideConquerKind::Compare,
            state,
            format!("Compare L[{}] = {} with R[{}] = {}", i, l, j, r),
        )
        .at_line(5)
        .var("i", i)
        .var("j", j)
        .var("k", k);

        let (value, line, from) = if l <= r {
            i += 1;
            (l, 6, "L")
        } else {
            j += 1;
            (r, 7, "R")
        };
        write_merged(rec, state, k, value, line, from);
        k += 1;
    }

    while i < state.left.len() {
        state.left_index = Some(i);
        state.right_index = None;
        let value = state.left[i];
        i += 1;
        write_merged(rec, state, k, value, 8, "L");
        k += 1;
    }
    while j < state.right.len() {
        state.left_index = None;
        state.right_index = Some(j);
        let value = state.right[j];
        j += 1;
        write_merged(rec, state, k, value, 8, "R");
        k += 1;
    }

    state.clear_marks();
    state.clear_buffers();
    rec.record(
        DivideConquerKind::Merged,
        state,
        format!("A[{}..{}] is merged: {:?}", lo, hi, &state.array[lo..=hi]),
    )
    .at_line(3)
    .var("lo", lo)
    .var("hi", hi);
}

fn write_merged(
    rec: &mut Rec,
    state: &mut DivideConquerState,
    k: usize,
    value: i64,
    line: usize,
    from: &str,
) {
    state.compare = None;
    state.array[k] = value;
    state.write = Some(k);
    state.writes += 1;
    rec.record(
        DivideConquerKind::MergeWrite,
        state,
        format!("Write {} from {} into A[{}]", value, from, k),
    )
    .at_line(line)
    .var("k", k);
}

fn quick_range(rec: &mut Rec, state: &mut DivideConquerState, lo: usize, hi: usize) {
    if lo >= hi {
        state.sorted.insert(lo);
        return;
    }
    state.stack.push((lo, hi));
    state.clear_marks();
    state.pivot = Some(hi);
    let pivot = state.array[hi];
    rec.record(
        DivideConquerKind::Pivot,
        state,
        format!("Partition A[{}..{}] around pivot A[{}] = {}", lo, hi, hi, pivot),
    )
    .at_line(2)
    .var("lo", lo)
    .var("hi", hi)
    .var("pivot", pivot)
    .var("i", lo);

    let mut i = lo;
    for j in lo..hi {
        state.clear_marks();
        state.compare = Some((j, hi));
        state.comparisons += 1;
        rec.record(
            DivideConquerKind::Compare,
            state,
            format!("Compare A[{}] = {} with pivot {}", j, state.array[j], pivot),
        )
        .at_line(4)
        .var("i", i)
        .var("j", j)
        .var("pivot", pivot);

        if state.array[j] < pivot {
            if i != j {
                state.array.swap(i, j);
                state.swaps += 1;
                state.compare = None;
                state.swap = Some((i, j));
                rec.record(
                    DivideConquerKind::Swap,
                    state,
                    format!("{} < {}: swap A[{}] and A[{}]", state.array[i], pivot, i, j),
                )
                .at_line(5)
                .var("i", i)
                .var("j", j);
            }
            i += 1;
        }
    }

    state.clear_marks();
    if i != hi {
        state.array.swap(i, hi);
        state.swaps += 1;
        state.swap = Some((i, hi));
    }
    state.pivot = Some(i);
    state.sorted.insert(i);
    rec.record(
        DivideConquerKind::Partitioned,
        state,
        format!("Pivot {} lands at its final position {}", pivot, i),
    )
    .at_line(6)
    .var("i", i)
    .var("pivot", pivot);

    state.pivot = None;
    state.clear_marks();
    if i > lo {
        quick_range(rec, state, lo, i - 1);
    }
    if i < hi {
        quick_range(rec, state, i + 1, hi);
    }
    state.stack.pop();
}

pub struct DivideConquerSort;

impl Visualization for DivideConquerSort {
    const NAME: &'static str = "divide and conquer sort";

    type Input = DivideConquerSortInput;
    type Kind = DivideConquerKind;
    type State = DivideConquerState;
    type Artifact = ();
    type Error = ArrayError;

    fn validate(input: &Self::Input) -> Result<(), Self::Error> {
        validate(input)
    }

    fn generate(input: &Self::Input) -> Output<Self::Kind, Self::State> {
        Output::new(generate_steps(input).finish())
    }

    fn pseudocode(input: &Self::Input) -> &'static [&'static str] {
        match input.algorithm {
            DivideConquerAlgorithm::Merge => MERGE_PSEUDOCODE,
            DivideConquerAlgorithm::Quick => QUICK_PSEUDOCODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(algorithm: DivideConquerAlgorithm, array: &[i64]) -> Output<DivideConquerKind, DivideConquerState> {
        DivideConquerSort::execute(&DivideConquerSortInput {
            algorithm,
            array: array.to_vec(),
        })
        .unwrap()
    }

    #[test]
    fn test_core_sorts() {
        let data = [38, 27, 43, 3, 9, 82, 10];
        let expected = vec![3, 9, 10, 27, 38, 43, 82];
        assert_eq!(merge_sort(&data), expected);
        assert_eq!(quick_sort(&data), expected);
    }

    #[test]
    fn test_merge_trace() {
        let out = run(DivideConquerAlgorithm::Merge, &[4, 1, 3, 2]);
        let last = out.trace.last().unwrap();
        assert_eq!(last.state.array, vec![1, 2, 3, 4]);
        assert_eq!(out.trace.count(DivideConquerKind::Divide), 3);
        assert_eq!(out.trace.count(DivideConquerKind::Merged), 3);
        // every level of a 4-element merge sort writes all its elements
        assert_eq!(last.state.writes, 8);
    }

    #[test]
    fn test_merge_stack_depth() {
        let out = run(DivideConquerAlgorithm::Merge, &[8, 7, 6, 5, 4, 3, 2, 1]);
        let deepest = out.trace.iter().map(|s| s.state.stack.len()).max().unwrap();
        assert_eq!(deepest, 3);
        assert_eq!(out.trace[1].state.active_range(), Some((0, 7)));
    }

    #[test]
    fn test_quick_pivots_final() {
        let out = run(DivideConquerAlgorithm::Quick, &[3, 6, 1, 5, 2, 4]);
        let last = out.trace.last().unwrap();
        assert_eq!(last.state.array, vec![1, 2, 3, 4, 5, 6]);
        for step in out.trace.iter().filter(|s| s.kind == DivideConquerKind::Partitioned) {
            let p = step.state.pivot.unwrap();
            assert_eq!(step.state.array[p], last.state.array[p]);
        }
    }

    #[test]
    fn test_single_element_has_no_recursion() {
        for algorithm in [DivideConquerAlgorithm::Merge, DivideConquerAlgorithm::Quick] {
            let out = run(algorithm, &[7]);
            use DivideConquerKind::*;
            assert_eq!(out.trace.kinds(), vec![Init, Complete]);
        }
    }
}
