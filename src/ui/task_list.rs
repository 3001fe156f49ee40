//! Task list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the scrollable task list.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::List;

    let block = Block::default()
        .title("Tasks")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    if app.tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No todos yet — add one below",
            theme::dimmed(),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let is_selected = idx == app.selected;

            let checkbox = if task.completed { "[✓]" } else { "[ ]" };
            let text_style = if task.completed {
                theme::completed()
            } else {
                theme::normal()
            };

            let line = Line::from(vec![
                Span::styled(checkbox, if task.completed { theme::dimmed() } else { theme::normal() }),
                Span::raw(" "),
                Span::styled(task.task.as_str(), text_style),
            ]);

            let style = if is_selected && is_focused {
                theme::selected()
            } else {
                theme::normal()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(block);

    // Stateful render keeps the selected row scrolled into view.
    let mut state = ListState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
