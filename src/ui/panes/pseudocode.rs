//! Pseudocode pane with keyword highlighting
//!
//! The line the current step points at is drawn with an arrow and a tinted
//! background, and kept at a fixed row while stepping so the listing
//! scrolls underneath it.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple highlighting for the pseudocode listings
fn highlight_line(line: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut word = String::new();
    let chars: Vec<char> = line.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }
        if !word.is_empty() {
            spans.push(Span::styled(word.clone(), word_style(&word, c == '(')));
            word.clear();
        }
        let style = match c {
            '(' | ')' | '[' | ']' | '{' | '}' => Style::default().fg(DEFAULT_THEME.primary),
            ':' if i + 1 == chars.len() => Style::default().fg(DEFAULT_THEME.comment),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
    }
    if !word.is_empty() {
        let style = word_style(&word, false);
        spans.push(Span::styled(word, style));
    }
    spans
}

fn word_style(word: &str, is_call: bool) -> Style {
    match word {
        "for" | "to" | "downto" | "while" | "repeat" | "if" | "else" | "return" | "and" | "or"
        | "not" | "each" | "in" | "stop" | "break" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "INF" | "NIL" | "DIAG" | "UP" | "LEFT" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Scroll state for the pseudocode pane
#[derive(Debug, Default)]
pub struct PseudocodeScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Render the pseudocode pane. `current_line` indexes into `listing`.
pub fn render_pseudocode_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    listing: &[&str],
    current_line: Option<usize>,
    is_focused: bool,
    scroll_state: &mut PseudocodeScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let total_lines = listing.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    if let Some(line) = current_line.filter(|&l| l < total_lines) {
        scroll_state.offset = line.saturating_sub(target_row);
        if total_lines > visible_height {
            scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
        } else {
            scroll_state.offset = 0;
        }
    }

    let visible_lines: Vec<Line> = listing
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let is_current = current_line == Some(idx);
            let (marker, num_style) = if is_current {
                (
                    "▶",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.comment))
            };

            let mut spans = vec![Span::styled(format!("{}{:3} ", marker, idx), num_style)];
            let content = highlight_line(line);
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                spans.extend(content.into_iter().map(|mut s| {
                    s.style = s.style.patch(bg);
                    s
                }));
            } else {
                spans.extend(content);
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_and_calls_are_split() {
        let spans = highlight_line("  for i = 1 to n: Merge(A)");
        let words: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(words.contains(&"for"));
        assert!(words.contains(&"Merge"));
        let merge = spans.iter().find(|s| s.content == "Merge").unwrap();
        assert_eq!(merge.style.fg, Some(DEFAULT_THEME.function));
        let for_kw = spans.iter().find(|s| s.content == "for").unwrap();
        assert_eq!(for_kw.style.fg, Some(DEFAULT_THEME.keyword));
    }
}
