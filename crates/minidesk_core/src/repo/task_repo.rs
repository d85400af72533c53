//! Insertion-ordered task list.
//!
//! # Invariants
//! - Listing returns owned copies; callers mutate through the repository only.

use crate::model::task::{Task, TaskId};
use crate::repo::{RepoError, RepoResult};

/// Query options for listing tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskListQuery {
    /// `Some(true)` keeps completed tasks, `Some(false)` keeps pending ones.
    pub completed: Option<bool>,
}

/// `Vec`-backed task storage.
#[derive(Debug, Clone, Default)]
pub struct TaskRepository {
    tasks: Vec<Task>,
}

impl TaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_task(&mut self, task: Task) -> TaskId {
        let id = task.id;
        self.tasks.push(task);
        id
    }

    pub fn remove_task(&mut self, id: TaskId) -> RepoResult<Task> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(RepoError::TaskNotFound(id))?;
        Ok(self.tasks.remove(position))
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn get_task_mut(&mut self, id: TaskId) -> RepoResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(RepoError::TaskNotFound(id))
    }

    pub fn list_tasks(&self, query: &TaskListQuery) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| query.completed.map_or(true, |want| task.is_completed() == want))
            .cloned()
            .collect()
    }
}
