//! Least-significant-digit radix sort with a configurable base
//!
//! Each pass distributes the array into `base` buckets by one digit and
//! collects the buckets back in order. Bucket order is stable, so after the
//! pass on the most significant digit the array is sorted.

use crate::errors::ArrayError;
use crate::pipeline::{Output, Visualization};
use crate::trace::{Recorder, StepKind};
use crate::validate::{check_array, check_non_negative, check_radix_base};
use serde::Serialize;

pub const PSEUDOCODE: &[&str] = &[
    "RadixSort(A, base):",
    "  for place = 1, base, base^2, ... while place <= max(A):",
    "    buckets = base empty lists",
    "    for each x in A: append x to buckets[(x / place) mod base]",
    "    A = buckets[0] + buckets[1] + ... + buckets[base - 1]",
    "  return A",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixSortInput {
    pub array: Vec<i64>,
    pub base: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RadixSortKind {
    Init,
    Distribute,
    Collect,
    PassComplete,
    Complete,
}

impl StepKind for RadixSortKind {
    fn label(self) -> &'static str {
        match self {
            RadixSortKind::Init => "init",
            RadixSortKind::Distribute => "distribute",
            RadixSortKind::Collect => "collect",
            RadixSortKind::PassComplete => "pass_complete",
            RadixSortKind::Complete => "complete",
        }
    }

    fn is_initial(self) -> bool {
        self == RadixSortKind::Init
    }

    fn is_terminal(self) -> bool {
        self == RadixSortKind::Complete
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadixSortState {
    pub array: Vec<i64>,
    pub base: u32,
    /// Place value of the digit being sorted on
    pub place: u64,
    /// 1-based pass number, 0 before the first pass
    pub pass: usize,
    pub total_passes: usize,
    pub buckets: Vec<Vec<i64>>,
    /// Element being distributed
    pub current: Option<usize>,
    pub digit: Option<u32>,
    /// Array slot being written during collection
    pub write: Option<usize>,
}

/// Digit of `value` at `place` in `base`
pub fn digit_at(value: i64, place: u64, base: u32) -> u32 {
    ((value as u64 / place) % base as u64) as u32
}

/// Number of passes needed to cover every digit of `max`
pub fn pass_count(max: i64, base: u32) -> usize {
    let max = max as u64;
    let base = base as u64;
    let mut passes = 1;
    let mut place = base;
    while place <= max {
        passes += 1;
        match place.checked_mul(base) {
            Some(next) => place = next,
            None => break,
        }
    }
    passes
}

pub fn radix_sort(array: &[i64], base: u32) -> Vec<i64> {
    let mut a = array.to_vec();
    let max = a.iter().copied().max().unwrap_or(0);
    let mut place = 1u64;
    for _ in 0..pass_count(max, base) {
        let mut buckets = vec![Vec::new(); base as usize];
        for &x in &a {
            buckets[digit_at(x, place, base) as usize].push(x);
        }
        a = buckets.into_iter().flatten().collect();
        place = place.saturating_mul(base as u64);
    }
    a
}

pub fn validate(input: &RadixSortInput) -> Result<(), ArrayError> {
    check_radix_base(input.base)?;
    check_array(&input.array)?;
    check_non_negative(&input.array)
}

pub fn generate_steps(input: &RadixSortInput) -> Recorder<RadixSortKind, RadixSortState> {
    let base = input.base;
    let max = input.array.iter().copied().max().unwrap_or(0);
    let total_passes = pass_count(max, base);
    let mut state = RadixSortState {
        array: input.array.clone(),
        base,
        place: 1,
        pass: 0,
        total_passes,
        buckets: vec![Vec::new(); base as usize],
        current: None,
        digit: None,
        write: None,
    };
    let mut rec = Recorder::new();

    rec.record(
        RadixSortKind::Init,
        &state,
        format!(
            "Radix sort {} elements in base {}: max is {}, so {} pass(es)",
            state.array.len(),
            base,
            max,
            total_passes
        ),
    )
    .at_line(0)
    .var("base", base)
    .var("max", max);

    for pass in 1..=total_passes {
        state.pass = pass;
        for bucket in state.buckets.iter_mut() {
            bucket.clear();
        }

        for i in 0..state.array.len() {
            let x = state.array[i];
            let d = digit_at(x, state.place, base);
            state.buckets[d as usize].push(x);
            state.current = Some(i);
            state.digit = Some(d);
            state.write = None;
            rec.record(
                RadixSortKind::Distribute,
                &state,
                format!(
                    "Pass {}: digit of {} at place {} is {}; append to bucket {}",
                    pass, x, state.place, d, d
                ),
            )
            .at_line(3)
            .var("place", state.place)
            .var("x", x)
            .var("digit", d);
        }

        state.current = None;
        let mut k = 0;
        for b in 0..base as usize {
            while !state.buckets[b].is_empty() {
                let x = state.buckets[b].remove(0);
                state.array[k] = x;
                state.write = Some(k);
                state.digit = Some(b as u32);
                rec.record(
                    RadixSortKind::Collect,
                    &state,
                    format!("Collect {} from bucket {} into A[{}]", x, b, k),
                )
                .at_line(4)
                .var("place", state.place)
                .var("k", k);
                k += 1;
            }
        }

        state.write = None;
        state.digit = None;
        rec.record(
            RadixSortKind::PassComplete,
            &state,
            format!(
                "Pass {} done: array is ordered by the last {} digit(s)",
                pass, pass
            ),
        )
        .at_line(1)
        .var("place", state.place);
        state.place = state.place.saturating_mul(base as u64);
    }

    rec.record(
        RadixSortKind::Complete,
        &state,
        format!("Sorted after {} pass(es)", total_passes),
    )
    .at_line(5)
    .var("passes", total_passes);
    rec
}

pub struct RadixSort;

impl Visualization for RadixSort {
    const NAME: &'static str = "radix sort";

    type Input = RadixSortInput;
    type Kind = RadixSortKind;
    type State = RadixSortState;
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
