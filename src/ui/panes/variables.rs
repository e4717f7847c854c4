//! Variables pane: the step tag and the bindings it recorded

use crate::trace::Variable;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_variables_pane(
    frame: &mut Frame,
    area: Rect,
    kind: &str,
    variables: &[Variable],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Variables ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let name_width = variables
        .iter()
        .map(|v| v.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" step ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format!(" {} ", kind),
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
    ];
    if variables.is_empty() {
        lines.push(Line::from(Span::styled(
            " (no variables)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }
    for var in variables {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<width$} ", var.name, width = name_width),
                Style::default().fg(DEFAULT_THEME.type_name),
            ),
            Span::styled("= ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                var.value.clone(),
                Style::default().fg(DEFAULT_THEME.number),
            ),
        ]));
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = (*scroll_offset).min(lines.len().saturating_sub(visible_height));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
