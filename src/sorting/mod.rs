//! Sorting families
//!
//! - [`elementary`]: bubble, selection and insertion sort
//! - [`divide_conquer`]: merge sort and quicksort
//! - [`heap`]: heap sort
//! - [`radix`]: LSD radix sort in a chosen base
//!
//! Every family reports the array contents at each step; the terminal step
//! holds the fully sorted array with every index marked sorted (radix sort
//! shows the collected array instead).

pub mod divide_conquer;
pub mod elementary;
pub mod heap;
pub mod radix;

pub use divide_conquer::{
    DivideConquerAlgorithm, DivideConquerKind, DivideConquerSort, DivideConquerSortInput,
    DivideConquerState,
};
pub use elementary::{
    ElementaryAlgorithm, ElementarySort, ElementarySortInput, ElementarySortKind,
    ElementarySortState,
};
pub use heap::{HeapPhase, HeapSort, HeapSortInput, HeapSortKind, HeapSortState};
pub use radix::{RadixSort, RadixSortInput, RadixSortKind, RadixSortState};
