//! Narration pane: the messages of every step up to the current one

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Render the narration pane. `messages` ends with the current step.
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    messages: &[&str],
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
        .title(" Narration ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let last = messages.len().saturating_sub(1);
    let all_items: Vec<ListItem> = messages
        .iter()
        .enumerate()
        .map(|(i, message)| {
            let (style, number_style) = if i == last {
                (
                    Style::default().fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD),
                    Style::default().fg(DEFAULT_THEME.secondary),
                )
            } else {
                (
                    Style::default().fg(DEFAULT_THEME.comment),
                    Style::default().fg(DEFAULT_THEME.comment),
                )
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4}  ", i + 1), number_style),
                Span::styled(message.to_string(), style),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
