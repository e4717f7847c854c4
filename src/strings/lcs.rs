//! Longest common subsequence by bottom-up dynamic programming
//!
//! The table is filled row by row alongside a direction grid. Traceback
//! starts at the bottom-right cell and follows the recorded directions,
//! collecting a character on every diagonal move.

use crate::errors::TextError;
use crate::pipeline::{Output, Visualization};
use crate::trace::{Recorder, StepKind};
use crate::validate::check_sequences;
use serde::Serialize;

pub const PSEUDOCODE: &[&str] = &[
    "LCS(X, Y):",
    "  C[i][0] = C[0][j] = 0",
    "  for i = 1 to n: for j = 1 to m:",
    "    if X[i] == Y[j]: C[i][j] = C[i-1][j-1] + 1; D[i][j] = DIAG",
    "    else if C[i-1][j] >= C[i][j-1]: C[i][j] = C[i-1][j]; D[i][j] = UP",
    "    else: C[i][j] = C[i][j-1]; D[i][j] = LEFT",
    "  i = n; j = m",
    "  while i > 0 and j > 0:",
    "    if D[i][j] == DIAG: prepend X[i]; i--; j--",
    "    else if D[i][j] == UP: i--  else: j--",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsInput {
    pub first: String,
    pub second: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LcsKind {
    Init,
    FillMatch,
    FillMax,
    TracebackDiagonal,
    TracebackMove,
    Complete,
}

impl StepKind for LcsKind {
    fn label(self) -> &'static str {
        match self {
            LcsKind::Init => "init",
            LcsKind::FillMatch => "fill_match",
            LcsKind::FillMax => "fill_max",
            LcsKind::TracebackDiagonal => "traceback_diagonal",
            LcsKind::TracebackMove => "traceback_move",
            LcsKind::Complete => "complete",
        }
    }

    fn is_initial(self) -> bool {
        self == LcsKind::Init
    }

    fn is_terminal(self) -> bool {
        self == LcsKind::Complete
    }
}

/// Where a cell's value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    None,
    Diagonal,
    Up,
    Left,
}

impl Direction {
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::None => " ",
            Direction::Diagonal => "↖",
            Direction::Up => "↑",
            Direction::Left => "←",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LcsPhase {
    Fill,
    Traceback,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LcsState {
    pub first: Vec<char>,
    pub second: Vec<char>,
    pub phase: LcsPhase,
    /// `(n + 1) x (m + 1)` lengths
    pub table: Vec<Vec<usize>>,
    pub directions: Vec<Vec<Direction>>,
    /// Cell just filled or visited
    pub cell: Option<(usize, usize)>,
    /// Cells visited by the traceback, in visit order
    pub path: Vec<(usize, usize)>,
    /// Subsequence recovered so far
    pub lcs: String,
}

impl LcsState {
    /// Whether cell `(i, j)` holds its final value at this step
    pub fn is_filled(&self, i: usize, j: usize) -> bool {
        if i == 0 || j == 0 || self.phase != LcsPhase::Fill {
            return true;
        }
        match self.cell {
            Some(cell) => (i, j) <= cell,
            None => false,
        }
    }
}

/// Table and direction grid for `first` x `second`
pub fn lcs_table(first: &[char], second: &[char]) -> (Vec<Vec<usize>>, Vec<Vec<Direction>>) {
    let (n, m) = (first.len(), second.len());
    let mut table = vec![vec![0; m + 1]; n + 1];
    let mut directions = vec![vec![Direction::None; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            let (value, dir) = cell_value(&table, first, second, i, j);
            table[i][j] = value;
            directions[i][j] = dir;
        }
    }
    (table, directions)
}

fn cell_value(
    table: &[Vec<usize>],
    first: &[char],
    second: &[char],
    i: usize,
    j: usize,
) -> (usize, Direction) {
    if first[i - 1] == second[j - 1] {
        (table[i - 1][j - 1] + 1, Direction::Diagonal)
    } else if table[i - 1][j] >= table[i][j - 1] {
        (table[i - 1][j], Direction::Up)
    } else {
        (table[i][j - 1], Direction::Left)
    }
}

pub fn lcs(first: &str, second: &str) -> String {
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();
    let (_, directions) = lcs_table(&a, &b);
    let (mut i, mut j) = (a.len(), b.len());
    let mut out = Vec::new();
    while i > 0 && j > 0 {
        match directions[i][j] {
            Direction::Diagonal => {
                out.push(a[i - 1]);
                i -= 1;
                j -= 1;
            }
            Direction::Up => i -= 1,
            Direction::Left | Direction::None => j -= 1,
        }
    }
    out.iter().rev().collect()
}

pub fn validate(input: &LcsInput) -> Result<(), TextError> {
    check_sequences(&input.first, &input.second)
}

pub fn generate_steps(input: &LcsInput) -> Recorder<LcsKind, LcsState> {
    let first: Vec<char> = input.first.chars().collect();
    let second: Vec<char> = input.second.chars().collect();
    let (n, m) = (first.len(), second.len());
    let mut state = LcsState {
        first,
        second,
        phase: LcsPhase::Fill,
        table: vec![vec![0; m + 1]; n + 1],
        directions: vec![vec![Direction::None; m + 1]; n + 1],
        cell: None,
        path: Vec::new(),
        lcs: String::new(),
    };
    let mut rec = Recorder::new();

    rec.record(
        LcsKind::Init,
        &state,
        format!(
            "Compare \"{}\" ({} chars) with \"{}\" ({} chars); row 0 and column 0 start at 0",
            input.first, n, input.second, m
        ),
    )
    .at_line(1)
    .var("n", n)
    .var("m", m);

    for i in 1..=n {
        for j in 1..=m {
            let (value, dir) = cell_value(&state.table, &state.first, &state.second, i, j);
            state.table[i][j] = value;
            state.directions[i][j] = dir;
            state.cell = Some((i, j));
            let (x, y) = (state.first[i - 1], state.second[j - 1]);
            let (kind, line, message) = match dir {
                Direction::Diagonal => (
                    LcsKind::FillMatch,
                    3,
                    format!("X[{}] = Y[{}] = '{}': C[{}][{}] = {}", i, j, x, i, j, value),
                ),
                Direction::Up => (
                    LcsKind::FillMax,
                    4,
                    format!(
                        "'{}' != '{}': take C[{}][{}] = {} from above",
                        x,
                        y,
                        i - 1,
                        j,
                        value
                    ),
                ),
                _ => (
                    LcsKind::FillMax,
                    5,
                    format!(
                        "'{}' != '{}': take C[{}][{}] = {} from the left",
                        x,
                        y,
                        i,
                        j - 1,
                        value
                    ),
                ),
            };
            rec.record(kind, &state, message)
                .at_line(line)
                .var("i", i)
                .var("j", j)
                .var("C[i][j]", value);
        }
    }

    state.phase = LcsPhase::Traceback;
    let (mut i, mut j) = (n, m);
    state.cell = Some((i, j));
    state.path.push((i, j));
    while i > 0 && j > 0 {
        match state.directions[i][j] {
            Direction::Diagonal => {
                let c = state.first[i - 1];
                state.lcs.insert(0, c);
                i -= 1;
                j -= 1;
                state.cell = Some((i, j));
                state.path.push((i, j));
                rec.record(
                    LcsKind::TracebackDiagonal,
                    &state,
                    format!("Diagonal: '{}' is part of the LCS, now \"{}\"", c, state.lcs),
                )
                .at_line(8)
                .var("i", i)
                .var("j", j);
            }
            dir => {
                if dir == Direction::Up {
                    i -= 1;
                } else {
                    j -= 1;
                }
                state.cell = Some((i, j));
                state.path.push((i, j));
                let way = if dir == Direction::Up { "up" } else { "left" };
                rec.record(
                    LcsKind::TracebackMove,
                    &state,
                    format!("Move {} to C[{}][{}]", way, i, j),
                )
                .at_line(9)
                .var("i", i)
                .var("j", j);
            }
        }
    }

    state.phase = LcsPhase::Done;
    state.cell = None;
    let length = state.table[n][m];
    rec.record(
        LcsKind::Complete,
        &state,
        format!("Longest common subsequence: \"{}\" (length {})", state.lcs, length),
    )
    .var("length", length);
    rec
}

pub struct Lcs;

impl Visualization for Lcs {
    const NAME: &'static str = "lcs";

    type Input = LcsInput;
    type Kind = LcsKind;
    type State = LcsState;
    type Artifact = ();
    type Error = TextError;

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

    fn run(first: &str, second: &str) -> Output<LcsKind, LcsState> {
        Lcs::execute(&LcsInput {
            first: first.into(),
            second: second.into(),
        })
        .unwrap()
    }

    #[test]
    fn test_core_lcs() {
        assert_eq!(lcs("ABCBDAB", "BDCABA"), "BCBA");
        assert_eq!(lcs("ABC", "DEF"), "");
        assert_eq!(lcs("SAME", "SAME"), "SAME");
    }

    #[test]
    fn test_trace_ends_with_lcs() {
        let out = run("ABCBDAB", "BDCABA");
        let last = out.trace.last().unwrap();
        assert_eq!(last.state.lcs, "BCBA");
        assert_eq!(last.state.table[7][6], 4);
        assert_eq!(out.trace.count(LcsKind::TracebackDiagonal), 4);
        assert_eq!(
            out.trace.count(LcsKind::FillMatch) + out.trace.count(LcsKind::FillMax),
            7 * 6
        );
    }

    #[test]
    fn test_fill_progress_is_row_major() {
        let out = run("AB", "BA");
        let fills: Vec<(usize, usize)> = out
            .trace
            .iter()
            .filter(|s| s.state.phase == LcsPhase::Fill)
            .filter_map(|s| s.state.cell)
            .collect();
        assert_eq!(fills, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert!(!out.trace[1].state.is_filled(2, 1));
        assert!(out.trace[1].state.is_filled(1, 1));
    }

    #[test]
    fn test_no_common_characters() {
        let out = run("ABC", "XYZ");
        let last = out.trace.last().unwrap();
        assert_eq!(last.state.lcs, "");
        assert_eq!(out.trace.count(LcsKind::TracebackDiagonal), 0);
    }
}
