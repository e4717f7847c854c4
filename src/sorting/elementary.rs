//! Quadratic comparison sorts: bubble, selection and insertion
//!
//! All three share one state shape and one kind catalog so a viewer can
//! switch between them without learning a new layout. Each variant records a
//! step per comparison and per element move.

use crate::errors::ArrayError;
use crate::pipeline::{Output, Visualization};
use crate::trace::{Recorder, StepKind};
use crate::validate::check_array;
use serde::Serialize;
use std::collections::BTreeSet;

pub const BUBBLE_PSEUDOCODE: &[&str] = &[
    "BubbleSort(A):",
    "  for i = 0 to n - 2:",
    "    swapped = false",
    "    for j = 0 to n - 2 - i:",
    "      if A[j] > A[j + 1]:",
    "        swap A[j], A[j + 1]; swapped = true",
    "    if not swapped: break",
    "  return A",
];

pub const SELECTION_PSEUDOCODE: &[&str] = &[
    "SelectionSort(A):",
    "  for i = 0 to n - 2:",
    "    min = i",
    "    for j = i + 1 to n - 1:",
    "      if A[j] < A[min]: min = j",
    "    swap A[i], A[min]",
    "  return A",
];

pub const INSERTION_PSEUDOCODE: &[&str] = &[
    "InsertionSort(A):",
    "  for i = 1 to n - 1:",
    "    key = A[i]; j = i - 1",
    "    while j >= 0 and A[j] > key:",
    "      A[j + 1] = A[j]; j = j - 1",
    "    A[j + 1] = key",
    "  return A",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementaryAlgorithm {
    Bubble,
    Selection,
    Insertion,
}

impl ElementaryAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            ElementaryAlgorithm::Bubble => "bubble sort",
            ElementaryAlgorithm::Selection => "selection sort",
            ElementaryAlgorithm::Insertion => "insertion sort",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementarySortInput {
    pub algorithm: ElementaryAlgorithm,
    pub array: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementarySortKind {
    Init,
    Compare,
    Swap,
    SelectMin,
    PickKey,
    Shift,
    Insert,
    MarkSorted,
    Complete,
}

impl StepKind for ElementarySortKind {
    fn label(self) -> &'static str {
        match self {
            ElementarySortKind::Init => "init",
            ElementarySortKind::Compare => "compare",
            ElementarySortKind::Swap => "swap",
            ElementarySortKind::SelectMin => "select_min",
            ElementarySortKind::PickKey => "pick_key",
            ElementarySortKind::Shift => "shift",
            ElementarySortKind::Insert => "insert",
            ElementarySortKind::MarkSorted => "mark_sorted",
            ElementarySortKind::Complete => "complete",
        }
    }

    fn is_initial(self) -> bool {
        self == ElementarySortKind::Init
    }

    fn is_terminal(self) -> bool {
        self == ElementarySortKind::Complete
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementarySortState {
    pub algorithm: ElementaryAlgorithm,
    pub array: Vec<i64>,
    pub compare: Option<(usize, usize)>,
    pub swap: Option<(usize, usize)>,
    /// Selection sort: index of the smallest element seen in this pass
    pub min_index: Option<usize>,
    /// Insertion sort: value being inserted and the hole it would fill
    pub key: Option<i64>,
    pub hole: Option<usize>,
    /// Indices whose value is in order
    pub sorted: BTreeSet<usize>,
    pub comparisons: usize,
    pub swaps: usize,
    pub shifts: usize,
}

impl ElementarySortState {
    fn new(algorithm: ElementaryAlgorithm, array: &[i64]) -> Self {
        ElementarySortState {
            algorithm,
            array: array.to_vec(),
            compare: None,
            swap: None,
            min_index: None,
            key: None,
            hole: None,
            sorted: BTreeSet::new(),
            comparisons: 0,
            swaps: 0,
            shifts: 0,
        }
    }

    fn clear_marks(&mut self) {
        self.compare = None;
        self.swap = None;
    }
}

/// Sort a copy of `array` with the chosen variant
pub fn sort(algorithm: ElementaryAlgorithm, array: &[i64]) -> Vec<i64> {
    let mut a = array.to_vec();
    let n = a.len();
    match algorithm {
        ElementaryAlgorithm::Bubble => {
            for i in 0..n.saturating_sub(1) {
                let mut swapped = false;
                for j in 0..n - 1 - i {
                    if a[j] > a[j + 1] {
                        a.swap(j, j + 1);
                        swapped = true;
                    }
                }
                if !swapped {
                    break;
                }
            }
        }
        ElementaryAlgorithm::Selection => {
            for i in 0..n.saturating_sub(1) {
                let mut min = i;
                for j in i + 1..n {
                    if a[j] < a[min] {
                        min = j;
                    }
                }
                a.swap(i, min);
            }
        }
        ElementaryAlgorithm::Insertion => {
            for i in 1..n {
                let key = a[i];
                let mut j = i;
                while j > 0 && a[j - 1] > key {
                    a[j] = a[j - 1];
                    j -= 1;
                }
                a[j] = key;
            }
        }
    }
    a
}

pub fn validate(input: &ElementarySortInput) -> Result<(), ArrayError> {
    check_array(&input.array)
}

type Rec = Recorder<ElementarySortKind, ElementarySortState>;

pub fn generate_steps(input: &ElementarySortInput) -> Rec {
    let mut state = ElementarySortState::new(input.algorithm, &input.array);
    let mut rec = Recorder::new();

    rec.record(
        ElementarySortKind::Init,
        &state,
        format!(
            "Sort {} elements with {}",
            state.array.len(),
            input.algorithm.name()
        ),
    )
    .at_line(0)
    .var("n", state.array.len());

    match input.algorithm {
        ElementaryAlgorithm::Bubble => bubble(&mut rec, &mut state),
        ElementaryAlgorithm::Selection => selection(&mut rec, &mut state),
        ElementaryAlgorithm::Insertion => insertion(&mut rec, &mut state),
    }

    state.clear_marks();
    state.min_index = None;
    state.key = None;
    state.hole = None;
    state.sorted = (0..state.array.len()).collect();
    let last_line = match input.algorithm {
        ElementaryAlgorithm::Bubble => 7,
        _ => 6,
    };
    rec.record(
        ElementarySortKind::Complete,
        &state,
        format!(
            "Sorted after {} comparison(s), {} swap(s) and {} shift(s)",
            state.comparisons, state.swaps, state.shifts
        ),
    )
    .at_line(last_line)
    .var("comparisons", state.comparisons)
    .var("swaps", state.swaps);
    rec
}

fn bubble(rec: &mut Rec, state: &mut ElementarySortState) {
    let n = state.array.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - i {
            state.clear_marks();
            state.compare = Some((j, j + 1));
            state.comparisons += 1;
            let (a, b) = (state.array[j], state.array[j + 1]);
            rec.record(
                ElementarySortKind::Compare,
                state,
                format!("Compare A[{}] = {} with A[{}] = {}", j, a, j + 1, b),
            )
            .at_line(4)
            .var("i", i)
            .var("j", j);

            if a > b {
                state.array.swap(j, j + 1);
                state.swaps += 1;
                swapped = true;
                state.compare = None;
                state.swap = Some((j, j + 1));
                rec.record(
                    ElementarySortKind::Swap,
                    state,
                    format!("{} > {}: swap positions {} and {}", a, b, j, j + 1),
                )
                .at_line(5)
                .var("i", i)
                .var("j", j)
                .var("swapped", true);
            }
        }

        state.clear_marks();
        let settled = n - 1 - i;
        if !swapped {
            state.sorted.extend(0..=settled);
            rec.record(
                ElementarySortKind::MarkSorted,
                state,
                format!("Pass {} made no swaps: the array is already sorted", i + 1),
            )
            .at_line(6)
            .var("i", i)
            .var("swapped", false);
            return;
        }
        state.sorted.insert(settled);
        rec.record(
            ElementarySortKind::MarkSorted,
            state,
            format!(
                "Pass {} complete: A[{}] = {} has bubbled into place",
                i + 1,
                settled,
                state.array[settled]
            ),
        )
        .at_line(1)
        .var("i", i);
    }
}

fn selection(rec: &mut Rec, state: &mut ElementarySortState) {
    let n = state.array.len();
    for i in 0..n.saturating_sub(1) {
        state.clear_marks();
        state.min_index = Some(i);
        rec.record(
            ElementarySortKind::SelectMin,
            state,
            format!("Start pass {}: assume A[{}] = {} is the minimum", i + 1, i, state.array[i]),
        )
        .at_line(2)
        .var("i", i)
        .var("min", i);

        let mut min = i;
        for j in i + 1..n {
            state.compare = Some((j, min));
            state.comparisons += 1;
            rec.record(
                ElementarySortKind::Compare,
                state,
                format!(
                    "Compare A[{}] = {} with current minimum A[{}] = {}",
                    j, state.array[j], min, state.array[min]
                ),
            )
            .at_line(4)
            .var("i", i)
            .var("j", j)
            .var("min", min);

            if state.array[j] < state.array[min] {
                min = j;
                state.min_index = Some(min);
                state.compare = None;
                rec.record(
                    ElementarySortKind::SelectMin,
                    state,
                    format!("New minimum A[{}] = {}", j, state.array[j]),
                )
                .at_line(4)
                .var("i", i)
                .var("j", j)
                .var("min", min);
            }
        }

        state.compare = None;
        if min != i {
            state.array.swap(i, min);
            state.swaps += 1;
            state.swap = Some((i, min));
            rec.record(
                ElementarySortKind::Swap,
                state,
                format!("Swap the minimum into position {}: A[{}] <-> A[{}]", i, i, min),
            )
            .at_line(5)
            .var("i", i)
            .var("min", min);
        }

        state.clear_marks();
        state.min_index = None;
        state.sorted.insert(i);
        rec.record(
            ElementarySortKind::MarkSorted,
            state,
            format!("A[{}] = {} is in its final position", i, state.array[i]),
        )
        .at_line(1)
        .var("i", i);
    }
}

fn insertion(rec: &mut Rec, state: &mut ElementarySortState) {
    let n = state.array.len();
    state.sorted.insert(0);
    for i in 1..n {
        state.clear_marks();
        let key = state.array[i];
        state.key = Some(key);
        state.hole = Some(i);
        rec.record(
            ElementarySortKind::PickKey,
            state,
            format!("Take key = A[{}] = {} and insert it into the sorted prefix", i, key),
        )
        .at_line(2)
        .var("i", i)
        .var("key", key)
        .var("j", i as isize - 1);

        let mut j = i;
        while j > 0 {
            state.swap = None;
            state.compare = Some((j - 1, j));
            state.comparisons += 1;
            let left = state.array[j - 1];
            rec.record(
                ElementarySortKind::Compare,
                state,
                format!("Compare A[{}] = {} with key {}", j - 1, left, key),
            )
            .at_line(3)
            .var("i", i)
            .var("key", key)
            .var("j", j - 1);

            if left <= key {
                break;
            }
            state.array[j] = left;
            state.shifts += 1;
            state.compare = None;
            state.swap = Some((j - 1, j));
            state.hole = Some(j - 1);
            rec.record(
                ElementarySortKind::Shift,
                state,
                format!("{} > {}: shift A[{}] right to position {}", left, key, j - 1, j),
            )
            .at_line(4)
            .var("i", i)
            .var("key", key)
            .var("j", j as isize - 2);
            j -= 1;
        }

        state.clear_marks();
        state.array[j] = key;
        state.key = None;
        state.hole = None;
        state.sorted.extend(0..=i);
        rec.record(
            ElementarySortKind::Insert,
            state,
            format!("Place key {} at position {}", key, j),
        )
        .at_line(5)
        .var("i", i)
        .var("key", key)
        .var("j", j as isize - 1);
    }
}

pub struct ElementarySort;

impl Visualization for ElementarySort {
    const NAME: &'static str = "elementary sort";

    type Input = ElementarySortInput;
    type Kind = ElementarySortKind;
    type State = ElementarySortState;
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
            ElementaryAlgorithm::Bubble => BUBBLE_PSEUDOCODE,
            ElementaryAlgorithm::Selection => SELECTION_PSEUDOCODE,
            ElementaryAlgorithm::Insertion => INSERTION_PSEUDOCODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ElementaryAlgorithm; 3] = [
        ElementaryAlgorithm::Bubble,
        ElementaryAlgorithm::Selection,
        ElementaryAlgorithm::Insertion,
    ];

    fn run(algorithm: ElementaryAlgorithm, array: &[i64]) -> Output<ElementarySortKind, ElementarySortState> {
        ElementarySort::execute(&ElementarySortInput {
            algorithm,
            array: array.to_vec(),
        })
        .unwrap()
    }

    #[test]
    fn test_every_variant_sorts() {
        let data = [5, -2, 9, 0, 5, 3];
        for algorithm in ALL {
            assert_eq!(sort(algorithm, &data), vec![-2, 0, 3, 5, 5, 9]);
            let out = run(algorithm, &data);
            let last = out.trace.last().unwrap();
            assert_eq!(last.kind, ElementarySortKind::Complete);
            assert_eq!(last.state.array, vec![-2, 0, 3, 5, 5, 9]);
            assert_eq!(last.state.sorted.len(), data.len());
        }
    }

    #[test]
    fn test_bubble_stops_early_on_sorted_input() {
        let out = run(ElementaryAlgorithm::Bubble, &[1, 2, 3, 4]);
        assert_eq!(out.trace.count(ElementarySortKind::Compare), 3);
        assert_eq!(out.trace.count(ElementarySortKind::Swap), 0);
    }

    #[test]
    fn test_bubble_swap_follows_compare() {
        let out = run(ElementaryAlgorithm::Bubble, &[2, 1]);
        use ElementarySortKind::*;
        assert_eq!(out.trace.kinds(), vec![Init, Compare, Swap, MarkSorted, Complete]);
        assert_eq!(out.trace[1].state.array, vec![2, 1]);
        assert_eq!(out.trace[2].state.array, vec![1, 2]);
    }

    #[test]
    fn test_selection_swaps_at_most_n_minus_one() {
        let out = run(ElementaryAlgorithm::Selection, &[4, 3, 2, 1]);
        assert!(out.trace.count(ElementarySortKind::Swap) <= 3);
        assert_eq!(out.trace.last().unwrap().state.comparisons, 6);
    }

    #[test]
    fn test_insertion_shifts_counted() {
        let out = run(ElementaryAlgorithm::Insertion, &[3, 2, 1]);
        let last = out.trace.last().unwrap();
        assert_eq!(last.state.shifts, 3);
        assert_eq!(out.trace.count(ElementarySortKind::Insert), 2);
    }

    #[test]
    fn test_single_element() {
        for algorithm in ALL {
            let out = run(algorithm, &[42]);
            assert_eq!(out.trace.len(), 2);
            assert_eq!(out.trace[1].state.array, vec![42]);
        }
    }
}
