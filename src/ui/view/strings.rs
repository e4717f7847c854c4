use super::{bold, counters, dim, heading, list_line, plain, StateView};
use crate::strings::{BoyerMooreState, KmpPhase, KmpState, LcsPhase, LcsState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// One character per column, styled individually
fn char_row<F>(label: &str, chars: &[char], offset: usize, style_of: F) -> Line<'static>
where
    F: Fn(usize) -> Style,
{
    let mut spans = vec![
        Span::styled(
            format!("{:<9}", label),
            Style::default().fg(DEFAULT_THEME.type_name),
        ),
        Span::raw("  ".repeat(offset)),
    ];
    for (i, c) in chars.iter().enumerate() {
        spans.push(Span::styled(format!("{} ", c), style_of(i)));
    }
    Line::from(spans)
}

fn ruler(len: usize) -> Line<'static> {
    let digits: String = (0..len).map(|i| format!("{} ", i % 10)).collect();
    Line::from(vec![Span::raw(" ".repeat(9)), Span::styled(digits, dim())])
}

fn offsets(matches: &[usize]) -> Vec<String> {
    matches.iter().map(|m| m.to_string()).collect()
}

fn in_match(matches: &[usize], m: usize, i: usize) -> bool {
    matches.iter().any(|&s| s <= i && i < s + m)
}

impl StateView for KmpState {
    fn lines(&self) -> Vec<Line<'static>> {
        let m = self.pattern.len();
        let mut lines = Vec::new();

        match self.phase {
            KmpPhase::Failure => {
                lines.push(heading("building the failure table"));
                lines.push(counters(&[(
                    "comparisons",
                    self.failure_comparisons.to_string(),
                )]));
                lines.push(Line::default());
                lines.push(char_row("pattern", &self.pattern, 0, |i| {
                    if self.position == Some(i) {
                        bold(DEFAULT_THEME.secondary)
                    } else if self.prefix_len == Some(i) {
                        bold(DEFAULT_THEME.highlight)
                    } else {
                        plain()
                    }
                }));
                lines.push(ruler(m));
            }
            KmpPhase::Search | KmpPhase::Done => {
                lines.push(heading(if self.phase == KmpPhase::Search {
                    "searching the text"
                } else {
                    "search finished"
                }));
                lines.push(counters(&[
                    ("comparisons", self.comparisons.to_string()),
                    ("table comparisons", self.failure_comparisons.to_string()),
                ]));
                lines.push(Line::default());
                lines.push(char_row("text", &self.text, 0, |i| {
                    if self.text_index == Some(i) {
                        bold(DEFAULT_THEME.secondary)
                    } else if in_match(&self.matches, m, i) {
                        Style::default().fg(DEFAULT_THEME.success)
                    } else {
                        plain()
                    }
                }));
                if let (Some(i), Some(j)) = (self.text_index, self.pattern_index) {
                    let offset = i.saturating_sub(j);
                    lines.push(char_row("pattern", &self.pattern, offset, |k| {
                        if k == j {
                            bold(DEFAULT_THEME.secondary)
                        } else if k < j {
                            Style::default().fg(DEFAULT_THEME.success)
                        } else {
                            dim()
                        }
                    }));
                }
                lines.push(ruler(self.text.len()));
            }
        }

        lines.push(Line::default());
        let table: Vec<String> = self
            .failure
            .iter()
            .enumerate()
            .map(|(i, f)| {
                if i < self.failure_filled {
                    f.to_string()
                } else {
                    "·".to_string()
                }
            })
            .collect();
        lines.push(list_line("F", &table));
        lines.push(list_line("matches", &offsets(&self.matches)));
        lines
    }
}

impl StateView for BoyerMooreState {
    fn lines(&self) -> Vec<Line<'static>> {
        let m = self.pattern.len();
        let mut lines = vec![
            counters(&[
                ("shift", self.shift.to_string()),
                ("alignments", self.alignments.to_string()),
                ("comparisons", self.comparisons.to_string()),
            ]),
            Line::default(),
        ];
        let compared = self.pattern_index.map(|j| self.shift + j);
        lines.push(char_row("text", &self.text, 0, |i| {
            if compared == Some(i) {
                bold(DEFAULT_THEME.secondary)
            } else if in_match(&self.matches, m, i) {
                Style::default().fg(DEFAULT_THEME.success)
            } else if i >= self.shift && i < self.shift + m {
                plain()
            } else {
                dim()
            }
        }));
        if self.shift + m <= self.text.len() {
            lines.push(char_row("pattern", &self.pattern, self.shift, |j| {
                if self.matched.contains(&j) {
                    bold(DEFAULT_THEME.success)
                } else if self.pattern_index == Some(j) {
                    bold(DEFAULT_THEME.error)
                } else {
                    plain()
                }
            }));
        }
        lines.push(ruler(self.text.len()));
        lines.push(Line::default());
        if let Some(next) = self.next_shift {
            lines.push(counters(&[("next slide", next.to_string())]));
        }
        lines.push(list_line("matches", &offsets(&self.matches)));
        lines
    }
}

impl StateView for LcsState {
    fn lines(&self) -> Vec<Line<'static>> {
        let header_style = Style::default().fg(DEFAULT_THEME.type_name);
        let mut lines = vec![
            heading(match self.phase {
                LcsPhase::Fill => "filling the table",
                LcsPhase::Traceback => "tracing back",
                LcsPhase::Done => "done",
            }),
            Line::default(),
        ];

        let mut header = vec![Span::raw("       ")];
        for c in &self.second {
            header.push(Span::styled(format!("{:>4}", c), header_style));
        }
        lines.push(Line::from(header));

        for i in 0..self.table.len() {
            let row_label = if i == 0 {
                ' '
            } else {
                self.first[i - 1]
            };
            let mut spans = vec![Span::styled(format!("{:>3}", row_label), header_style)];
            for j in 0..self.table[i].len() {
                let style = if self.cell == Some((i, j)) {
                    bold(DEFAULT_THEME.secondary)
                } else if self.path.contains(&(i, j)) {
                    bold(DEFAULT_THEME.success)
                } else if i == 0 || j == 0 {
                    dim()
                } else {
                    plain()
                };
                let text = if self.is_filled(i, j) {
                    format!("{}{:>2}", self.directions[i][j].arrow(), self.table[i][j])
                } else {
                    "  ·".to_string()
                };
                spans.push(Span::raw(" "));
                spans.push(Span::styled(text, style));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        lines.push(list_line("LCS", &[format!("\"{}\"", self.lcs)]));
        lines
    }
}
