//! Header bar rendering (title + clear-all hint).

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::App;

/// Render the header bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::normal());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Todo App",
        theme::panel_title(theme::TITLE),
    )));
    frame.render_widget(title, inner);

    // Completion counter on the left half of the right side, clear-all
    // trigger hint at the far right (the header "delete" icon equivalent).
    let done = app.tasks.iter().filter(|t| t.completed).count();
    let right = Paragraph::new(Line::from(vec![
        Span::styled(format!("{done}/{} done  ", app.tasks.len()), theme::dimmed()),
        Span::styled("✕ clear all", theme::normal().fg(theme::ERROR)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(right, inner);
}
