//! Per-algorithm rendering of step payloads
//!
//! Each feature's state type implements [`StateView`], turning one snapshot
//! into styled lines for the state pane. The helpers here lay out the
//! shapes most states share: a row of array cells with an index ruler,
//! labelled counters and inline lists.

mod arrays;
mod graph;
mod strings;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Something the state pane can draw
pub trait StateView {
    fn lines(&self) -> Vec<Line<'static>>;
}

pub(crate) fn plain() -> Style {
    Style::default().fg(DEFAULT_THEME.fg)
}

pub(crate) fn dim() -> Style {
    Style::default().fg(DEFAULT_THEME.comment)
}

pub(crate) fn bold(color: ratatui::style::Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// `name: value` pairs on one line, separated by gaps
pub(crate) fn counters(pairs: &[(&str, String)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 3);
    for (i, (name, value)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("{}: ", name),
            Style::default().fg(DEFAULT_THEME.type_name),
        ));
        spans.push(Span::styled(value.clone(), bold(DEFAULT_THEME.number)));
    }
    Line::from(spans)
}

/// A bold heading line
pub(crate) fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), bold(DEFAULT_THEME.primary)))
}

/// `label  a, b, c` with a placeholder when empty
pub(crate) fn list_line(label: &str, items: &[String]) -> Line<'static> {
    let body = if items.is_empty() {
        Span::styled("(none)".to_string(), dim())
    } else {
        Span::styled(items.join(", "), plain())
    };
    Line::from(vec![
        Span::styled(
            format!("{:<10}", label),
            Style::default().fg(DEFAULT_THEME.type_name),
        ),
        body,
    ])
}

/// Array cells with an index ruler underneath and an optional row of
/// markers (`L`, `M`, `H`...) under the cells they point at
pub(crate) fn cells<F>(values: &[String], style_of: F, markers: &[(usize, &str)]) -> Vec<Line<'static>>
where
    F: Fn(usize) -> Style,
{
    let index_width = values.len().saturating_sub(1).to_string().len();
    let width = values
        .iter()
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(1)
        .max(index_width);

    let cell_row: Vec<Span<'static>> = values
        .iter()
        .enumerate()
        .flat_map(|(i, v)| {
            [
                Span::styled(format!("{:>width$}", v, width = width), style_of(i)),
                Span::raw(" "),
            ]
        })
        .collect();
    let ruler: String = (0..values.len())
        .map(|i| format!("{:>width$} ", i, width = width))
        .collect();

    let mut lines = vec![Line::from(cell_row), Line::from(Span::styled(ruler, dim()))];

    if !markers.is_empty() {
        let mut labels: Vec<Vec<&str>> = vec![Vec::new(); values.len()];
        for &(i, label) in markers {
            if let Some(slot) = labels.get_mut(i) {
                slot.push(label);
            }
        }
        let row: String = labels
            .iter()
            .map(|l| format!("{:>width$} ", l.join(""), width = width))
            .collect();
        lines.push(Line::from(Span::styled(
            row,
            bold(DEFAULT_THEME.secondary),
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_cells_align_values_and_ruler() {
        let values: Vec<String> = ["5", "12", "7"].iter().map(|s| s.to_string()).collect();
        let lines = cells(&values, |_| plain(), &[(1, "M")]);
        assert_eq!(text(&lines[0]), " 5 12  7 ");
        assert_eq!(text(&lines[1]), " 0  1  2 ");
        assert_eq!(text(&lines[2]), "    M    ");
    }

    #[test]
    fn test_list_line_placeholder() {
        assert!(text(&list_line("queue", &[])).ends_with("(none)"));
    }
}
