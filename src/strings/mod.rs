//! String matching and sequence alignment
//!
//! - [`kmp`]: Knuth-Morris-Pratt, exporting the failure table
//! - [`boyer_moore`]: Boyer-Moore with the bad-character rule, exporting the table
//! - [`lcs`]: longest common subsequence with traceback
//!
//! Strings are handled as `char` sequences so indices in steps and messages
//! count characters, not bytes.

pub mod boyer_moore;
pub mod kmp;
pub mod lcs;

pub use boyer_moore::{BadCharacterTable, BoyerMoore, BoyerMooreInput, BoyerMooreKind, BoyerMooreState};
pub use kmp::{Kmp, KmpInput, KmpKind, KmpPhase, KmpState};
pub use lcs::{Direction, Lcs, LcsInput, LcsKind, LcsPhase, LcsState};
