//! Terminal UI rendering.

pub mod header;
pub mod input;
pub mod modal;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header bar
            Constraint::Min(3),    // Task list
            Constraint::Length(3), // Input footer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    header::render(frame, chunks[0], app);
    task_list::render(frame, chunks[1], app);
    input::render(frame, chunks[2], app);
    status_bar::render(frame, chunks[3], app);

    // Modals draw last so they sit on top of everything.
    if let Some(modal) = &app.modal {
        modal::render(frame, frame.area(), modal);
    }
}
