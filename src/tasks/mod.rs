//! Task data model and list operations.
//!
//! The task list is the application's single source of truth. All list
//! operations are pure: they take the current list by reference and return
//! a new list value. Wiring the result back into application state (and
//! triggering a persistence snapshot) is the caller's job.

pub mod list;
pub mod task;

pub use list::{add, clear, complete, delete};
pub use task::{Task, TaskId};

use thiserror::Error;

/// Errors that can occur during task operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task text cannot be empty.
    #[error("please enter a task")]
    TextEmpty,
}
