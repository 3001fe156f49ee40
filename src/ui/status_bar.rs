//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, Modal, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match &app.modal {
        Some(Modal::Alert(_)) => "any key: dismiss",
        Some(Modal::ConfirmClear) => "y/Enter: yes | n/Esc: no",
        None => match app.focus {
            PanelFocus::Input => "Enter: add | Tab: task list | Ctrl+K: clear all | Esc: quit",
            PanelFocus::List => {
                "Enter/Space: complete | d: delete | ↑↓/jk: move | Tab: input | Esc: quit"
            }
        },
    };

    let status_line = Line::from(vec![
        Span::styled("tuido v0.1.0", theme::bold()),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
