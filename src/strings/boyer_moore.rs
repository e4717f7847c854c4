//! Boyer-Moore search with the bad-character rule
//!
//! The pattern is compared right to left at each alignment. On a mismatch
//! the pattern slides so that the last occurrence of the mismatched text
//! character lines up with it, or by one position if that would move it
//! backwards.

use crate::errors::TextError;
use crate::pipeline::{Output, Visualization};
use crate::trace::{Recorder, StepKind};
use crate::validate::check_text_and_pattern;
use serde::Serialize;
use std::collections::BTreeMap;

pub const PSEUDOCODE: &[&str] = &[
    "BoyerMoore(T, P):",
    "  last[c] = rightmost index of c in P, or -1",
    "  s = 0",
    "  while s <= n - m:",
    "    j = m - 1",
    "    while j >= 0 and P[j] == T[s + j]: j = j - 1",
    "    if j < 0:",
    "      report s; s = s + (s + m < n ? m - last[T[s + m]] : 1)",
    "    else: s = s + max(1, j - last[T[s + j]])",
];

/// Rightmost index of each pattern character
pub type BadCharacterTable = BTreeMap<char, usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoyerMooreInput {
    pub text: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoyerMooreKind {
    Init,
    Align,
    Match,
    Mismatch,
    Found,
    Complete,
}

impl StepKind for BoyerMooreKind {
    fn label(self) -> &'static str {
        match self {
            BoyerMooreKind::Init => "init",
            BoyerMooreKind::Align => "align",
            BoyerMooreKind::Match => "match",
            BoyerMooreKind::Mismatch => "mismatch",
            BoyerMooreKind::Found => "found",
            BoyerMooreKind::Complete => "complete",
        }
    }

    fn is_initial(self) -> bool {
        self == BoyerMooreKind::Init
    }

    fn is_terminal(self) -> bool {
        self == BoyerMooreKind::Complete
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoyerMooreState {
    pub text: Vec<char>,
    pub pattern: Vec<char>,
    /// Text offset the pattern is aligned at
    pub shift: usize,
    /// Pattern index being compared
    pub pattern_index: Option<usize>,
    /// Pattern indices already matched at this alignment
    pub matched: Vec<usize>,
    /// Distance to the next alignment, once decided
    pub next_shift: Option<usize>,
    pub matches: Vec<usize>,
    pub comparisons: usize,
    pub alignments: usize,
}

pub fn bad_character_table(pattern: &[char]) -> BadCharacterTable {
    let mut table = BTreeMap::new();
    for (i, &c) in pattern.iter().enumerate() {
        table.insert(c, i);
    }
    table
}

fn last_index(table: &BadCharacterTable, c: char) -> isize {
    table.get(&c).map_or(-1, |&i| i as isize)
}

/// Slide after a full match at `s`
fn shift_after_match(table: &BadCharacterTable, text: &[char], m: usize, s: usize) -> usize {
    if s + m < text.len() {
        (m as isize - last_index(table, text[s + m])) as usize
    } else {
        1
    }
}

/// Slide after a mismatch at pattern index `j`
fn shift_after_mismatch(table: &BadCharacterTable, c: char, j: usize) -> usize {
    (j as isize - last_index(table, c)).max(1) as usize
}

/// Start offsets of every occurrence
pub fn boyer_moore_search(text: &[char], pattern: &[char]) -> Vec<usize> {
    let table = bad_character_table(pattern);
    let (n, m) = (text.len(), pattern.len());
    let mut matches = Vec::new();
    let mut s = 0;
    while s + m <= n {
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[s + j - 1] {
            j -= 1;
        }
        if j == 0 {
            matches.push(s);
            s += shift_after_match(&table, text, m, s);
        } else {
            s += shift_after_mismatch(&table, text[s + j - 1], j - 1);
        }
    }
    matches
}

pub fn validate(input: &BoyerMooreInput) -> Result<(), TextError> {
    check_text_and_pattern(&input.text, &input.pattern)
}

pub fn generate_steps(
    input: &BoyerMooreInput,
) -> (Recorder<BoyerMooreKind, BoyerMooreState>, BadCharacterTable) {
    let text: Vec<char> = input.text.chars().collect();
    let pattern: Vec<char> = input.pattern.chars().collect();
    let table = bad_character_table(&pattern);
    let (n, m) = (text.len(), pattern.len());
    let mut state = BoyerMooreState {
        text,
        pattern,
        shift: 0,
        pattern_index: None,
        matched: Vec::new(),
        next_shift: None,
        matches: Vec::new(),
        comparisons: 0,
        alignments: 0,
    };
    let mut rec = Recorder::new();

    rec.record(
        BoyerMooreKind::Init,
        &state,
        format!(
            "Search for \"{}\" in a text of {} chars using {} bad-character entries",
            input.pattern,
            n,
            table.len()
        ),
    )
    .at_line(1);

    while state.shift + m <= n {
        let s = state.shift;
        state.alignments += 1;
        state.pattern_index = None;
        state.matched.clear();
        state.next_shift = None;
        rec.record(
            BoyerMooreKind::Align,
            &state,
            format!("Align the pattern at offset {}", s),
        )
        .at_line(3)
        .var("s", s);

        let mut j = m;
        let mut mismatch = None;
        while j > 0 {
            let (p, t) = (state.pattern[j - 1], state.text[s + j - 1]);
            state.pattern_index = Some(j - 1);
            state.comparisons += 1;
            if p != t {
                mismatch = Some((j - 1, t));
                break;
            }
            state.matched.push(j - 1);
            rec.record(
                BoyerMooreKind::Match,
                &state,
                format!("P[{}] = '{}' matches T[{}]", j - 1, p, s + j - 1),
            )
            .at_line(5)
            .var("s", s)
            .var("j", j - 1);
            j -= 1;
        }

        match mismatch {
            None => {
                let slide = shift_after_match(&table, &state.text, m, s);
                state.pattern_index = None;
                state.matches.push(s);
                state.next_shift = Some(slide);
                rec.record(
                    BoyerMooreKind::Found,
                    &state,
                    format!(
                        "Pattern found at offset {} after {} comparison(s); slide by {}",
                        s, state.comparisons, slide
                    ),
                )
                .at_line(7)
                .var("s", s)
                .var("shift", slide);
                state.shift += slide;
            }
            Some((j, c)) => {
                let slide = shift_after_mismatch(&table, c, j);
                state.next_shift = Some(slide);
                let reason = match table.get(&c) {
                    Some(&last) => format!("last '{}' in the pattern is at {}", c, last),
                    None => format!("'{}' does not occur in the pattern", c),
                };
                rec.record(
                    BoyerMooreKind::Mismatch,
                    &state,
                    format!(
                        "P[{}] = '{}' differs from T[{}] = '{}': {}; slide by {}",
                        j,
                        state.pattern[j],
                        s + j,
                        c,
                        reason,
                        slide
                    ),
                )
                .at_line(8)
                .var("s", s)
                .var("j", j)
                .var("shift", slide);
                state.shift += slide;
            }
        }
    }

    state.pattern_index = None;
    state.matched.clear();
    state.next_shift = None;
    let message = if state.matches.is_empty() {
        format!(
            "Pattern not found after {} comparison(s) over {} alignment(s)",
            state.comparisons, state.alignments
        )
    } else {
        format!(
            "Found {} occurrence(s) at {:?} after {} comparison(s)",
            state.matches.len(),
            state.matches,
            state.comparisons
        )
    };
    rec.record(BoyerMooreKind::Complete, &state, message)
        .var("comparisons", state.comparisons)
        .var("alignments", state.alignments);
    (rec, table)
}

pub struct BoyerMoore;

impl Visualization for BoyerMoore {
    const NAME: &'static str = "boyer-moore";

    type Input = BoyerMooreInput;
    type Kind = BoyerMooreKind;
    type State = BoyerMooreState;
    type Artifact = BadCharacterTable;
    type Error = TextError;

    fn validate(input: &Self::Input) -> Result<(), Self::Error> {
        validate(input)
    }

    fn generate(input: &Self::Input) -> Output<Self::Kind, Self::State, Self::Artifact> {
        let (rec, table) = generate_steps(input);
        Output {
            trace: rec.finish(),
            artifact: table,
        }
    }

    fn pseudocode(_input: &Self::Input) -> &'static [&'static str] {
        PSEUDOCODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_bad_character_table_keeps_rightmost() {
        let table = bad_character_table(&chars("ABCAB"));
        assert_eq!(table.get(&'A'), Some(&3));
        assert_eq!(table.get(&'B'), Some(&4));
        assert_eq!(table.get(&'C'), Some(&2));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_core_search() {
        assert_eq!(boyer_moore_search(&chars("HERE IS A SIMPLE EXAMPLE"), &chars("EXAMPLE")), vec![17]);
        assert_eq!(boyer_moore_search(&chars("AAAA"), &chars("AA")), vec![0, 1, 2]);
        assert!(boyer_moore_search(&chars("ABC"), &chars("D")).is_empty());
    }

    #[test]
    fn test_trace_reports_matches() {
        let out = BoyerMoore::execute(&BoyerMooreInput {
            text: "HERE IS A SIMPLE EXAMPLE".into(),
            pattern: "EXAMPLE".into(),
        })
        .unwrap();
        let last = out.trace.last().unwrap();
        assert_eq!(last.kind, BoyerMooreKind::Complete);
        assert_eq!(last.state.matches, vec![17]);
        assert_eq!(out.artifact.get(&'E'), Some(&6));
        // the bad-character rule skips most alignments
        assert!(last.state.alignments < 24 - 7 + 1);
        assert_eq!(out.trace.count(BoyerMooreKind::Align), last.state.alignments);
    }

    #[test]
    fn test_mismatch_slides_past_absent_char() {
        let out = BoyerMoore::execute(&BoyerMooreInput {
            text: "XXXXAB".into(),
            pattern: "AB".into(),
        })
        .unwrap();
        let first_mismatch = out
            .trace
            .iter()
            .find(|s| s.kind == BoyerMooreKind::Mismatch)
            .unwrap();
        // 'X' never occurs in "AB", so the pattern jumps fully past it
        assert_eq!(first_mismatch.state.next_shift, Some(2));
        assert_eq!(out.trace.last().unwrap().state.matches, vec![4]);
    }
}
