//! Pure operations on the task list.
//!
//! Each operation returns a new `Vec<Task>` and leaves its input untouched.
//! Unknown ids are silent no-ops rather than errors: ids are generated
//! internally, so a miss does not arise in normal use.

use super::{Task, TaskError, TaskId};

/// Appends a new task with the given text.
///
/// The created task is the last element of the returned list, carries a
/// fresh random id, and starts not completed.
///
/// # Errors
///
/// Returns [`TaskError::TextEmpty`] if `text` is the empty string.
pub fn add(tasks: &[Task], text: &str) -> Result<Vec<Task>, TaskError> {
    if text.is_empty() {
        return Err(TaskError::TextEmpty);
    }
    let mut next = tasks.to_vec();
    next.push(Task::new(text));
    Ok(next)
}

/// Marks the task with the given id complete.
///
/// Positions of all records are preserved. Completion is one-way, so
/// applying this to an already-completed task (or an unknown id) changes
/// nothing.
#[must_use]
pub fn complete(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| {
            if t.id == id {
                Task {
                    completed: true,
                    ..t.clone()
                }
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Removes the task with the given id, if present.
#[must_use]
pub fn delete(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks.iter().filter(|t| t.id != id).cloned().collect()
}

/// Empties the list.
#[must_use]
pub fn clear(_tasks: &[Task]) -> Vec<Task> {
    Vec::new()
}
