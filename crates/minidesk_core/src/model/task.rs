//! Task domain model.
//!
//! # Responsibility
//! - Define the task record tracked by `TaskManager`.
//!
//! # Invariants
//! - `id` is generated once and never reused; it replaces reference identity.
//! - `is_completed` starts as `false` and only moves to `true`; the field is
//!   private and `mark_completed` is its only writer.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one task.
pub type TaskId = Uuid;

/// To-do item with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    is_completed: bool,
}

impl Task {
    /// Creates a pending task with a generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, description)
    }

    /// Creates a pending task with a caller-provided id.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            is_completed: false,
        }
    }

    /// Marks the task done. Applying it more than once is a no-op.
    pub fn mark_completed(&mut self) {
        self.is_completed = true;
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn is_pending(&self) -> bool {
        !self.is_completed
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task: {} (Completed: {})", self.title, self.is_completed)
    }
}
