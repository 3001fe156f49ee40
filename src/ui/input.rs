//! Input footer rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the input footer (text entry + add trigger).
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input;

    // Build the input text with a block cursor at the caret position.
    let mut display_text = app.input.clone();
    if is_focused {
        let byte_pos = display_text
            .char_indices()
            .map(|(i, _)| i)
            .nth(app.cursor_position)
            .unwrap_or(display_text.len());
        display_text.insert(byte_pos, '█');
    }

    let input_line = if display_text.is_empty() {
        Line::from(Span::styled("Add todo...", theme::dimmed()))
    } else {
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let block = Block::default()
        .title("Add Todo")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);
    frame.render_widget(paragraph, area);
}
