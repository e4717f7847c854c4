//! State pane: the current step's payload, drawn by its [`StateView`]

use crate::ui::theme::DEFAULT_THEME;
use crate::ui::view::StateView;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the state pane. `notes` are per-run facts appended below the
/// state, such as a lookup table computed before the first step.
pub fn render_state_pane<S: StateView>(
    frame: &mut Frame,
    area: Rect,
    state: &S,
    notes: &[String],
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
        .title(" State ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines = state.lines();
    if !notes.is_empty() {
        lines.push(Line::default());
        for note in notes {
            lines.push(Line::from(Span::styled(
                note.clone(),
                Style::default().fg(DEFAULT_THEME.comment),
            )));
        }
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = (*scroll_offset).min(lines.len().saturating_sub(visible_height));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
