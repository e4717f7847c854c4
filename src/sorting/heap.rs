//! Heap sort on an in-place binary max-heap
//!
//! The heap is built bottom-up, then the maximum is repeatedly swapped to the
//! end of the shrinking heap and the root is sifted down again.

use crate::errors::ArrayError;
use crate::pipeline::{Output, Visualization};
use crate::trace::{Recorder, StepKind};
use crate::validate::check_array;
use serde::Serialize;
use std::collections::BTreeSet;

pub const PSEUDOCODE: &[&str] = &[
    "HeapSort(A):",
    "  for i = floor(n / 2) - 1 down to 0: SiftDown(A, i, n)",
    "  for end = n - 1 down to 1:",
    "    swap A[0], A[end]",
    "    SiftDown(A, 0, end)",
    "SiftDown(A, i, size):",
    "  largest = biggest of A[i], A[2i + 1], A[2i + 2] below size",
    "  if largest != i: swap A[i], A[largest]; SiftDown(A, largest, size)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapSortInput {
    pub array: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeapSortKind {
    Init,
    BuildHeap,
    Heapify,
    Compare,
    Swap,
    Extract,
    Complete,
}

impl StepKind for HeapSortKind {
    fn label(self) -> &'static str {
        match self {
            HeapSortKind::Init => "init",
            HeapSortKind::BuildHeap => "build_heap",
            HeapSortKind::Heapify => "heapify",
            HeapSortKind::Compare => "compare",
            HeapSortKind::Swap => "swap",
            HeapSortKind::Extract => "extract",
            HeapSortKind::Complete => "complete",
        }
    }

    fn is_initial(self) -> bool {
        self == HeapSortKind::Init
    }

    fn is_terminal(self) -> bool {
        self == HeapSortKind::Complete
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeapPhase {
    Build,
    Extract,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeapSortState {
    pub array: Vec<i64>,
    /// Elements `0..heap_size` form the heap, the rest are sorted
    pub heap_size: usize,
    pub phase: HeapPhase,
    /// Node currently being sifted down
    pub node: Option<usize>,
    pub compare: Option<(usize, usize)>,
    pub swap: Option<(usize, usize)>,
    pub sorted: BTreeSet<usize>,
    pub comparisons: usize,
    pub swaps: usize,
}

impl HeapSortState {
    fn clear_marks(&mut self) {
        self.compare = None;
        self.swap = None;
    }
}

pub fn heap_sort(array: &[i64]) -> Vec<i64> {
    fn sift_down(a: &mut [i64], mut i: usize, size: usize) {
        loop {
            let mut largest = i;
            for child in [2 * i + 1, 2 * i + 2] {
                if child < size && a[child] > a[largest] {
                    largest = child;
                }
            }
            if largest == i {
                return;
            }
            a.swap(i, largest);
            i = largest;
        }
    }

    let mut a = array.to_vec();
    let n = a.len();
    for i in (0..n / 2).rev() {
        sift_down(&mut a, i, n);
    }
    for end in (1..n).rev() {
        a.swap(0, end);
        sift_down(&mut a, 0, end);
    }
    a
}

pub fn validate(input: &HeapSortInput) -> Result<(), ArrayError> {
    check_array(&input.array)
}

type Rec = Recorder<HeapSortKind, HeapSortState>;

pub fn generate_steps(input: &HeapSortInput) -> Rec {
    let n = input.array.len();
    let mut state = HeapSortState {
        array: input.array.clone(),
        heap_size: n,
        phase: HeapPhase::Build,
        node: None,
        compare: None,
        swap: None,
        sorted: BTreeSet::new(),
        comparisons: 0,
        swaps: 0,
    };
    let mut rec = Recorder::new();

    rec.record(
        HeapSortKind::Init,
        &state,
        format!("Heap sort {} elements", n),
    )
    .at_line(0)
    .var("n", n);

    rec.record(
        HeapSortKind::BuildHeap,
        &state,
        format!(
            "Build a max-heap by sifting down nodes {}..0",
            (n / 2).saturating_sub(1)
        ),
    )
    .at_line(1);

    for i in (0..n / 2).rev() {
        sift_down(&mut rec, &mut state, i, n);
    }

    state.phase = HeapPhase::Extract;
    for end in (1..n).rev() {
        state.clear_marks();
        state.node = None;
        let max = state.array[0];
        state.array.swap(0, end);
        state.swaps += 1;
        state.swap = Some((0, end));
        state.heap_size = end;
        state.sorted.insert(end);
        rec.record(
            HeapSortKind::Extract,
            &state,
            format!("Move the maximum {} to position {}; heap shrinks to {}", max, end, end),
        )
        .at_line(3)
        .var("end", end);
        sift_down(&mut rec, &mut state, 0, end);
    }

    state.clear_marks();
    state.node = None;
    state.phase = HeapPhase::Done;
    state.heap_size = 0;
    state.sorted = (0..n).collect();
    rec.record(
        HeapSortKind::Complete,
        &state,
        format!(
            "Sorted after {} comparison(s) and {} swap(s)",
            state.comparisons, state.swaps
        ),
    )
    .var("comparisons", state.comparisons)
    .var("swaps", state.swaps);
    rec
}

fn sift_down(rec: &mut Rec, state: &mut HeapSortState, start: usize, size: usize) {
    let mut i = start;
    state.clear_marks();
    state.node = Some(i);
    rec.record(
        HeapSortKind::Heapify,
        state,
        format!("Sift down A[{}] = {} within heap of size {}", i, state.array[i], size),
    )
    .at_line(5)
    .var("i", i)
    .var("size", size);

    loop {
        let mut largest = i;
        for child in [2 * i + 1, 2 * i + 2] {
            if child >= size {
                continue;
            }
            state.clear_marks();
            state.compare = Some((child, largest));
            state.comparisons += 1;
            rec.record(
                HeapSortKind::Compare,
                state,
                format!(
                    "Compare child A[{}] = {} with largest so far A[{}] = {}",
                    child, state.array[child], largest, state.array[largest]
                ),
            )
            .at_line(6)
            .var("i", i)
            .var("largest", largest);
            if state.array[child] > state.array[largest] {
                largest = child;
            }
        }

        if largest == i {
            return;
        }
        state.array.swap(i, largest);
        state.swaps += 1;
        state.compare = None;
        state.swap = Some((i, largest));
        state.node = Some(largest);
        rec.record(
            HeapSortKind::Swap,
            state,
            format!("Swap A[{}] and A[{}] to restore the heap property", i, largest),
        )
        .at_line(7)
        .var("i", i)
        .var("largest", largest);
        i = largest;
    }
}

pub struct HeapSort;

impl Visualization for HeapSort {
    const NAME: &'static str = "heap sort";

    type Input = HeapSortInput;
    type Kind = HeapSortKind;
    type State = HeapSortState;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn is_max_heap(a: &[i64], size: usize) -> bool {
        (1..size).all(|i| a[(i - 1) / 2] >= a[i])
    }

    #[test]
    fn test_heap_sort_matches_core() {
        let data = vec![12, 11, 13, 5, 6, 7];
        let out = HeapSort::execute(&HeapSortInput { array: data.clone() }).unwrap();
        let last = out.trace.last().unwrap();
        assert_eq!(last.state.array, heap_sort(&data));
        assert_eq!(last.state.array, vec![5, 6, 7, 11, 12, 13]);
    }

    #[test]
    fn test_heap_property_at_each_extract() {
        let out = HeapSort::execute(&HeapSortInput {
            array: vec![3, 9, 2, 7, 1, 8, 4],
        })
        .unwrap();
        let extracts: Vec<_> = out
            .trace
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind == HeapSortKind::Extract)
            .collect();
        assert_eq!(extracts.len(), 6);
        // the step before each extraction shows a valid heap over the live prefix
        for (idx, step) in extracts {
            let before = &out.trace[idx - 1];
            assert!(is_max_heap(&before.state.array, step.state.heap_size + 1));
        }
    }

    #[test]
    fn test_sorted_suffix_grows() {
        let out = HeapSort::execute(&HeapSortInput {
            array: vec![4, 1, 3],
        })
        .unwrap();
        for step in out.trace.iter() {
            if step.state.phase == HeapPhase::Extract {
                assert!(step.state.sorted.iter().all(|&i| i >= step.state.heap_size));
            }
        }
    }
}
