//! Array search
//!
//! - [`binary`]: recursive binary search over a sorted array

pub mod binary;

pub use binary::{BinarySearch, BinarySearchInput, BinarySearchKind, BinarySearchState};
