use super::{bold, cells, counters, dim, heading, list_line, plain, StateView};
use crate::search::BinarySearchState;
use crate::sorting::{
    DivideConquerAlgorithm, DivideConquerState, ElementarySortState, HeapPhase, HeapSortState,
    RadixSortState,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

fn rendered(array: &[i64]) -> Vec<String> {
    array.iter().map(|v| v.to_string()).collect()
}

fn is_pair(pair: Option<(usize, usize)>, i: usize) -> bool {
    pair.is_some_and(|(a, b)| a == i || b == i)
}

impl StateView for BinarySearchState {
    fn lines(&self) -> Vec<Line<'static>> {
        let style_of = |i: usize| {
            if self.found == Some(i) {
                bold(DEFAULT_THEME.success)
            } else if self.mid == Some(i) {
                bold(DEFAULT_THEME.secondary)
            } else if self.in_range(i) {
                plain()
            } else {
                dim()
            }
        };
        let mut markers = Vec::new();
        if self.low >= 0 && (self.low as usize) < self.array.len() {
            markers.push((self.low as usize, "L"));
        }
        if let Some(mid) = self.mid {
            markers.push((mid, "M"));
        }
        if self.high >= 0 && (self.high as usize) < self.array.len() {
            markers.push((self.high as usize, "H"));
        }

        let mut lines = vec![counters(&[
            ("target", self.target.to_string()),
            ("depth", self.depth.to_string()),
            ("comparisons", self.comparisons.to_string()),
        ])];
        lines.push(Line::default());
        lines.extend(cells(&rendered(&self.array), style_of, &markers));
        lines.push(Line::default());
        lines.push(counters(&[
            ("low", self.low.to_string()),
            ("high", self.high.to_string()),
        ]));
        lines
    }
}

impl StateView for ElementarySortState {
    fn lines(&self) -> Vec<Line<'static>> {
        let style_of = |i: usize| {
            if is_pair(self.swap, i) {
                bold(DEFAULT_THEME.error)
            } else if is_pair(self.compare, i) {
                bold(DEFAULT_THEME.secondary)
            } else if self.min_index == Some(i) {
                bold(DEFAULT_THEME.highlight)
            } else if self.hole == Some(i) {
                bold(DEFAULT_THEME.primary)
            } else if self.sorted.contains(&i) {
                Style::default().fg(DEFAULT_THEME.success)
            } else {
                plain()
            }
        };
        let mut markers = Vec::new();
        if let Some(min) = self.min_index {
            markers.push((min, "m"));
        }
        if let Some(hole) = self.hole {
            markers.push((hole, "^"));
        }

        let mut lines = vec![
            heading(self.algorithm.name()),
            counters(&[
                ("comparisons", self.comparisons.to_string()),
                ("swaps", self.swaps.to_string()),
                ("shifts", self.shifts.to_string()),
            ]),
            Line::default(),
        ];
        lines.extend(cells(&rendered(&self.array), style_of, &markers));
        if let Some(key) = self.key {
            lines.push(Line::default());
            lines.push(counters(&[("key", key.to_string())]));
        }
        lines
    }
}

impl StateView for DivideConquerState {
    fn lines(&self) -> Vec<Line<'static>> {
        let active = self.active_range();
        let style_of = |i: usize| {
            if is_pair(self.swap, i) {
                bold(DEFAULT_THEME.error)
            } else if self.write == Some(i) {
                bold(DEFAULT_THEME.primary)
            } else if is_pair(self.compare, i) {
                bold(DEFAULT_THEME.secondary)
            } else if self.pivot == Some(i) {
                bold(DEFAULT_THEME.highlight)
            } else if self.sorted.contains(&i) {
                Style::default().fg(DEFAULT_THEME.success)
            } else if active.is_some_and(|(lo, hi)| lo <= i && i <= hi) {
                plain()
            } else {
                dim()
            }
        };
        let mut markers = Vec::new();
        if let Some(pivot) = self.pivot {
            markers.push((pivot, "p"));
        }
        if let Some(write) = self.write {
            markers.push((write, "w"));
        }

        let counters_line = match self.algorithm {
            DivideConquerAlgorithm::Merge => counters(&[
                ("comparisons", self.comparisons.to_string()),
                ("writes", self.writes.to_string()),
            ]),
            DivideConquerAlgorithm::Quick => counters(&[
                ("comparisons", self.comparisons.to_string()),
                ("swaps", self.swaps.to_string()),
            ]),
        };
        let mut lines = vec![heading(self.algorithm.name()), counters_line, Line::default()];
        lines.extend(cells(&rendered(&self.array), style_of, &markers));
        lines.push(Line::default());

        let calls: Vec<String> = self
            .stack
            .iter()
            .map(|(lo, hi)| format!("[{}..{}]", lo, hi))
            .collect();
        lines.push(list_line("calls", &calls));

        if !self.left.is_empty() || !self.right.is_empty() {
            lines.push(buffer_line("left", &self.left, self.left_index));
            lines.push(buffer_line("right", &self.right, self.right_index));
        }
        lines
    }
}

/// A merge buffer; consumed values are dimmed and the cursor is bold
fn buffer_line(label: &str, values: &[i64], cursor: Option<usize>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:<10}", label),
        Style::default().fg(DEFAULT_THEME.type_name),
    )];
    for (i, v) in values.iter().enumerate() {
        let style = match cursor {
            Some(c) if i == c => bold(DEFAULT_THEME.secondary),
            Some(c) if i < c => dim(),
            None => dim(),
            _ => plain(),
        };
        spans.push(Span::styled(format!("{} ", v), style));
    }
    Line::from(spans)
}

impl StateView for HeapSortState {
    fn lines(&self) -> Vec<Line<'static>> {
        let style_of = |i: usize| {
            if is_pair(self.swap, i) {
                bold(DEFAULT_THEME.error)
            } else if is_pair(self.compare, i) {
                bold(DEFAULT_THEME.secondary)
            } else if self.node == Some(i) {
                bold(DEFAULT_THEME.highlight)
            } else if self.sorted.contains(&i) {
                Style::default().fg(DEFAULT_THEME.success)
            } else if i < self.heap_size {
                plain()
            } else {
                dim()
            }
        };
        let markers: Vec<(usize, &str)> = self.node.map(|n| (n, "^")).into_iter().collect();
        let phase = match self.phase {
            HeapPhase::Build => "building the heap",
            HeapPhase::Extract => "extracting maxima",
            HeapPhase::Done => "done",
        };

        let mut lines = vec![
            heading(format!("heap sort: {}", phase)),
            counters(&[
                ("heap size", self.heap_size.to_string()),
                ("comparisons", self.comparisons.to_string()),
                ("swaps", self.swaps.to_string()),
            ]),
            Line::default(),
        ];
        lines.extend(cells(&rendered(&self.array), style_of, &markers));
        lines.push(Line::default());
        lines.extend(heap_levels(&self.array[..self.heap_size.min(self.array.len())]));
        lines
    }
}

/// The heap region drawn level by level
fn heap_levels(heap: &[i64]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut width = 1;
    while start < heap.len() {
        let end = (start + width).min(heap.len());
        let level: Vec<String> = heap[start..end].iter().map(|v| v.to_string()).collect();
        lines.push(Line::from(vec![
            Span::styled(format!("level {:<4}", lines.len()), dim()),
            Span::styled(level.join("  "), plain()),
        ]));
        start = end;
        width *= 2;
    }
    lines
}

impl StateView for RadixSortState {
    fn lines(&self) -> Vec<Line<'static>> {
        let style_of = |i: usize| {
            if self.write == Some(i) {
                bold(DEFAULT_THEME.primary)
            } else if self.current == Some(i) {
                bold(DEFAULT_THEME.secondary)
            } else {
                plain()
            }
        };
        let mut lines = vec![
            heading(format!("radix sort, base {}", self.base)),
            counters(&[
                ("pass", format!("{}/{}", self.pass, self.total_passes)),
                ("place", self.place.to_string()),
                (
                    "digit",
                    self.digit.map_or_else(|| "-".to_string(), |d| d.to_string()),
                ),
            ]),
            Line::default(),
        ];
        lines.extend(cells(&rendered(&self.array), style_of, &[]));
        lines.push(Line::default());

        for (digit, bucket) in self.buckets.iter().enumerate() {
            let is_target = self.digit == Some(digit as u32);
            let label_style = if is_target {
                bold(DEFAULT_THEME.secondary)
            } else {
                Style::default().fg(DEFAULT_THEME.type_name)
            };
            let values: Vec<String> = bucket.iter().map(|v| v.to_string()).collect();
            lines.push(Line::from(vec![
                Span::styled(format!("{:>2} │ ", digit), label_style),
                Span::styled(
                    values.join(" "),
                    plain().add_modifier(if is_target {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
            ]));
        }
        lines
    }
}
