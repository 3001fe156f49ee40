//! Application state and event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tasks::{self, Task, TaskError};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Input footer is focused (default).
    Input,
    /// Task list is focused.
    List,
}

/// A blocking overlay that captures all input until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Validation message, dismissed by any key.
    Alert(String),
    /// Two-option clear-all confirmation (`y`/`Enter` vs `n`/`Esc`).
    ConfirmClear,
}

/// Main application state.
///
/// Holds the task list and the pending input text, the only process-wide
/// state. The UI is drawn as a pure function of this struct; mutations
/// happen exclusively through [`handle_key_event`](Self::handle_key_event).
pub struct App {
    /// Current task list, insertion-ordered.
    pub tasks: Vec<Task>,
    /// Pending text input.
    pub input: String,
    /// Cursor position in the input (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the task list.
    pub selected: usize,
    /// Open modal overlay, if any.
    pub modal: Option<Modal>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Set by every mutation, consumed by [`take_dirty`](Self::take_dirty).
    dirty: bool,
}

impl App {
    /// Creates an application with an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// Creates an application seeded with a previously persisted list.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            input: String::new(),
            cursor_position: 0,
            focus: PanelFocus::Input,
            selected: 0,
            modal: None,
            should_quit: false,
            dirty: false,
        }
    }

    /// Takes the dirty flag, reporting whether any mutation happened since
    /// the last call.
    ///
    /// This is the state-changed hook: the main loop calls it once per
    /// handled event and forwards a snapshot to the persistence writer
    /// when it returns `true`. Re-renders alone never set it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // An open modal captures everything.
        if let Some(modal) = self.modal.clone() {
            self.handle_modal_key(&modal, key);
            return;
        }

        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
                self.request_clear();
                return;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.cycle_focus();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::List => self.handle_list_key(key),
        }
    }

    /// Handle a key event while a modal is open.
    fn handle_modal_key(&mut self, modal: &Modal, key: KeyEvent) {
        match modal {
            Modal::Alert(_) => {
                self.modal = None;
            }
            Modal::ConfirmClear => match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                    self.modal = None;
                    self.clear_all();
                }
                KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                    self.modal = None;
                }
                _ => {}
            },
        }
    }

    /// Handle key event when the input footer is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.complete_selected(),
            KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => self.delete_selected(),
            _ => {}
        }
    }

    /// Toggle focus between the input footer and the task list.
    pub const fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::List,
            PanelFocus::List => PanelFocus::Input,
        };
    }

    /// Submit the pending input as a new task.
    ///
    /// Empty input raises the validation modal and leaves the list
    /// unchanged; otherwise the input is cleared for the next entry.
    fn submit_task(&mut self) {
        match tasks::add(&self.tasks, &self.input) {
            Ok(next) => {
                self.tasks = next;
                self.input.clear();
                self.cursor_position = 0;
                self.dirty = true;
            }
            Err(err @ TaskError::TextEmpty) => {
                self.modal = Some(Modal::Alert(err.to_string()));
            }
        }
    }

    /// Mark the selected task complete.
    ///
    /// Completion is one-way: an already-completed row is a no-op and does
    /// not mark the state dirty.
    fn complete_selected(&mut self) {
        let Some(task) = self.tasks.get(self.selected) else {
            return;
        };
        if task.completed {
            return;
        }
        let id = task.id;
        self.tasks = tasks::complete(&self.tasks, id);
        self.dirty = true;
    }

    /// Delete the selected task.
    fn delete_selected(&mut self) {
        let Some(task) = self.tasks.get(self.selected) else {
            return;
        };
        let id = task.id;
        self.tasks = tasks::delete(&self.tasks, id);
        self.clamp_selection();
        self.dirty = true;
    }

    /// Open the clear-all confirmation. The list is only emptied once the
    /// user confirms.
    pub fn request_clear(&mut self) {
        self.modal = Some(Modal::ConfirmClear);
    }

    /// Empty the task list. Reached only through the confirmation modal.
    fn clear_all(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        self.tasks = tasks::clear(&self.tasks);
        self.selected = 0;
        self.dirty = true;
    }

    /// Keep the selection on a valid row after deletions.
    fn clamp_selection(&mut self) {
        if self.selected >= self.tasks.len() {
            self.selected = self.tasks.len().saturating_sub(1);
        }
    }

    /// Byte offset of the cursor's character position.
    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let index = self.byte_index();
        self.input.insert(index, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let index = self.byte_index();
        self.input.remove(index);
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Select the previous task row.
    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next task row.
    fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
