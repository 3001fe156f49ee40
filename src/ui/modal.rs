//! Modal overlay rendering (validation alert and clear-all confirmation).

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::theme;
use crate::app::Modal;

/// Render a modal centered over the given area.
pub fn render(frame: &mut Frame, area: Rect, modal: &Modal) {
    let popup = centered_rect(50, 5, area);
    frame.render_widget(Clear, popup);

    let (title, body, hint, border_color) = match modal {
        Modal::Alert(message) => ("Error", message.clone(), "press any key", theme::ERROR),
        Modal::ConfirmClear => (
            "Confirm",
            "Clear todos?".to_string(),
            "y: yes    n: no",
            theme::WARNING,
        ),
    };

    let block = Block::default()
        .title(Span::styled(title, theme::panel_title(border_color)))
        .borders(Borders::ALL)
        .border_style(theme::normal().fg(border_color));

    let lines = vec![
        Line::from(Span::styled(body, theme::normal())),
        Line::from(""),
        Line::from(Span::styled(hint, theme::dimmed())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, popup);
}

/// A fixed-height rect centered in `area`, `percent_x` percent wide.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
