//! The task record and its identifier.

use serde::{Deserialize, Serialize};

/// Unique identifier for a task, assigned at creation.
///
/// Ids are random `u64` values generated per session. Collisions within a
/// single list are accepted as negligible; ids are never coordinated across
/// devices. Serialized transparently as a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(rand::random())
    }

    /// Creates a `TaskId` from a raw value (e.g. one read back from disk).
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One to-do item.
///
/// The display text is fixed at creation (there is no edit-in-place) and
/// the completion flag only ever flips `false → true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation.
    pub id: TaskId,
    /// Display text.
    pub task: String,
    /// Completion flag.
    pub completed: bool,
}

impl Task {
    /// Creates a new, not-yet-completed task with a fresh id.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            task: text.into(),
            completed: false,
        }
    }
}
