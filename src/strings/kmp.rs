//! Knuth-Morris-Pratt pattern search
//!
//! The trace has two phases. The failure function is built first by
//! comparing the pattern against itself, then the text is scanned; on a
//! mismatch the pattern index falls back through the failure table so no
//! text character is compared twice after a match.

use crate::errors::TextError;
use crate::pipeline::{Output, Visualization};
use crate::trace::{Recorder, StepKind};
use crate::validate::check_text_and_pattern;
use serde::Serialize;

pub const PSEUDOCODE: &[&str] = &[
    "KMP(T, P):",
    "  F[0] = 0; len = 0",
    "  for i = 1 to m - 1:",
    "    while len > 0 and P[i] != P[len]: len = F[len - 1]",
    "    if P[i] == P[len]: len = len + 1",
    "    F[i] = len",
    "  j = 0",
    "  for i = 0 to n - 1:",
    "    while j > 0 and T[i] != P[j]: j = F[j - 1]",
    "    if T[i] == P[j]: j = j + 1",
    "    if j == m: report i - m + 1; j = F[j - 1]",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmpInput {
    pub text: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KmpKind {
    Init,
    FailureCompare,
    FailureExtend,
    FailureFallback,
    FailureZero,
    SearchCompare,
    Match,
    Mismatch,
    Found,
    Complete,
}

impl StepKind for KmpKind {
    fn label(self) -> &'static str {
        match self {
            KmpKind::Init => "init",
            KmpKind::FailureCompare => "failure_compare",
            KmpKind::FailureExtend => "failure_extend",
            KmpKind::FailureFallback => "failure_fallback",
            KmpKind::FailureZero => "failure_zero",
            KmpKind::SearchCompare => "search_compare",
            KmpKind::Match => "match",
            KmpKind::Mismatch => "mismatch",
            KmpKind::Found => "found",
            KmpKind::Complete => "complete",
        }
    }

    fn is_initial(self) -> bool {
        self == KmpKind::Init
    }

    fn is_terminal(self) -> bool {
        self == KmpKind::Complete
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KmpPhase {
    Failure,
    Search,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KmpState {
    pub text: Vec<char>,
    pub pattern: Vec<char>,
    pub phase: KmpPhase,
    /// Failure table; only the first `failure_filled` entries are final
    pub failure: Vec<usize>,
    pub failure_filled: usize,
    /// Failure phase cursors: `i` and the current border length
    pub position: Option<usize>,
    pub prefix_len: Option<usize>,
    /// Search phase cursors, always inside `text` and `pattern`
    pub text_index: Option<usize>,
    pub pattern_index: Option<usize>,
    /// Start offsets of every occurrence found so far
    pub matches: Vec<usize>,
    /// Character comparisons made while scanning the text
    pub comparisons: usize,
    /// Character comparisons made while building the failure table
    pub failure_comparisons: usize,
}

/// Longest proper prefix that is also a suffix, for every prefix of `pattern`
pub fn failure_function(pattern: &[char]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut len = 0;
    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = failure[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
        }
        failure[i] = len;
    }
    failure
}

/// Start offsets of every (possibly overlapping) occurrence
pub fn kmp_search(text: &[char], pattern: &[char]) -> Vec<usize> {
    let failure = failure_function(pattern);
    let mut matches = Vec::new();
    let mut j = 0;
    for (i, &c) in text.iter().enumerate() {
        while j > 0 && c != pattern[j] {
            j = failure[j - 1];
        }
        if c == pattern[j] {
            j += 1;
        }
        if j == pattern.len() {
            matches.push(i + 1 - j);
            j = failure[j - 1];
        }
    }
    matches
}

pub fn validate(input: &KmpInput) -> Result<(), TextError> {
    check_text_and_pattern(&input.text, &input.pattern)
}

type Rec = Recorder<KmpKind, KmpState>;

/// Replay both phases. Returns the recorder and the finished failure table.
pub fn generate_steps(input: &KmpInput) -> (Rec, Vec<usize>) {
    let text: Vec<char> = input.text.chars().collect();
    let pattern: Vec<char> = input.pattern.chars().collect();
    let m = pattern.len();
    let mut state = KmpState {
        text,
        pattern,
        phase: KmpPhase::Failure,
        failure: vec![0; m],
        failure_filled: 1,
        position: None,
        prefix_len: Some(0),
        text_index: None,
        pattern_index: None,
        matches: Vec::new(),
        comparisons: 0,
        failure_comparisons: 0,
    };
    let mut rec = Recorder::new();

    rec.record(
        KmpKind::Init,
        &state,
        format!(
            "Search for \"{}\" ({} chars) in a text of {} chars; F[0] = 0",
            input.pattern,
            m,
            state.text.len()
        ),
    )
    .at_line(1)
    .var("len", 0);

    build_failure(&mut rec, &mut state);
    let failure = state.failure.clone();
    search(&mut rec, &mut state);

    state.phase = KmpPhase::Done;
    state.text_index = None;
    state.pattern_index = None;
    let message = if state.matches.is_empty() {
        format!(
            "Pattern not found after {} comparison(s)",
            state.comparisons
        )
    } else {
        format!(
            "Found {} occurrence(s) at {:?} after {} comparison(s)",
            state.matches.len(),
            state.matches,
            state.comparisons
        )
    };
    rec.record(KmpKind::Complete, &state, message)
        .var("matches", state.matches.len())
        .var("comparisons", state.comparisons);
    (rec, failure)
}

fn build_failure(rec: &mut Rec, state: &mut KmpState) {
    let m = state.pattern.len();
    let mut len = 0;
    let mut i = 1;
    while i < m {
        state.position = Some(i);
        state.prefix_len = Some(len);
        state.failure_comparisons += 1;
        let (pi, pl) = (state.pattern[i], state.pattern[len]);
        rec.record(
            KmpKind::FailureCompare,
            state,
            format!("Compare P[{}] = '{}' with P[{}] = '{}'", i, pi, len, pl),
        )
        .at_line(3)
        .var("i", i)
        .var("len", len);

        if pi == pl {
            len += 1;
            state.failure[i] = len;
            state.failure_filled = i + 1;
            state.prefix_len = Some(len);
            rec.record(
                KmpKind::FailureExtend,
                state,
                format!("Match: the border grows to {}; F[{}] = {}", len, i, len),
            )
            .at_line(5)
            .var("i", i)
            .var("len", len);
            i += 1;
        } else if len > 0 {
            let previous = len;
            len = state.failure[len - 1];
            state.prefix_len = Some(len);
            rec.record(
                KmpKind::FailureFallback,
                state,
                format!(
                    "Mismatch: fall back len = F[{}] = {}",
                    previous - 1,
                    len
                ),
            )
            .at_line(3)
            .var("i", i)
            .var("len", len);
        } else {
            state.failure[i] = 0;
            state.failure_filled = i + 1;
            rec.record(
                KmpKind::FailureZero,
                state,
                format!("Mismatch with no border to fall back to: F[{}] = 0", i),
            )
            .at_line(5)
            .var("i", i)
            .var("len", 0);
            i += 1;
        }
    }
    state.position = None;
    state.prefix_len = None;
}

fn search(rec: &mut Rec, state: &mut KmpState) {
    let n = state.text.len();
    let m = state.pattern.len();
    state.phase = KmpPhase::Search;
    let mut i = 0;
    let mut j = 0;
    while i < n {
        state.text_index = Some(i);
        state.pattern_index = Some(j);
        state.comparisons += 1;
        let (t, p) = (state.text[i], state.pattern[j]);
        rec.record(
            KmpKind::SearchCompare,
            state,
            format!("Compare T[{}] = '{}' with P[{}] = '{}'", i, t, j, p),
        )
        .at_line(8)
        .var("i", i)
        .var("j", j)
        .var("comparisons", state.comparisons);

        // Cursors stay on the compared pair; `i` and `j` advance in the variables
        if t == p {
            i += 1;
            j += 1;
            rec.record(
                KmpKind::Match,
                state,
                format!("'{}' matches: {} of {} pattern chars aligned", t, j, m),
            )
            .at_line(9)
            .var("i", i)
            .var("j", j);

            if j == m {
                let offset = i - m;
                state.matches.push(offset);
                rec.record(
                    KmpKind::Found,
                    state,
                    format!(
                        "Pattern found at offset {} after {} comparison(s)",
                        offset, state.comparisons
                    ),
                )
                .at_line(10)
                .var("offset", offset)
                .var("comparisons", state.comparisons);
                j = state.failure[j - 1];
                state.pattern_index = Some(j);
            }
        } else if j > 0 {
            let previous = j;
            j = state.failure[j - 1];
            state.pattern_index = Some(j);
            rec.record(
                KmpKind::Mismatch,
                state,
                format!(
                    "Mismatch: keep T[{}] and shift the pattern, j = F[{}] = {}",
                    i,
                    previous - 1,
                    j
                ),
            )
            .at_line(8)
            .var("i", i)
            .var("j", j);
        } else {
            i += 1;
            rec.record(
                KmpKind::Mismatch,
                state,
                format!("Mismatch at the first pattern char: advance to T[{}]", i),
            )
            .at_line(7)
            .var("i", i)
            .var("j", 0);
        }
    }
}

pub struct Kmp;

impl Visualization for Kmp {
    const NAME: &'static str = "kmp";

    type Input = KmpInput;
    type Kind = KmpKind;
    type State = KmpState;
    /// The failure table
    type Artifact = Vec<usize>;
    type Error = TextError;

    fn validate(input: &Self::Input) -> Result<(), Self::Error> {
        validate(input)
    }

    fn generate(input: &Self::Input) -> Output<Self::Kind, Self::State, Self::Artifact> {
        let (rec, failure) = generate_steps(input);
        Output {
            trace: rec.finish(),
            artifact: failure,
        }
    }

    fn pseudocode(_input: &Self::Input) -> &'static [&'static str] {
        PSEUDOCODE
    }
}
