//! Task use-case service.
//!
//! # Responsibility
//! - Provide add/remove/complete entry points keyed by `TaskId`.
//! - Expose completed/pending projections for the task shell.
//!
//! # Invariants
//! - Projections are owned copies in insertion order.
//! - `mark_completed` is idempotent.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{TaskListQuery, TaskRepository};
use crate::repo::RepoResult;
use log::info;

/// Task registry.
pub struct TaskManager {
    repo: TaskRepository,
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self {
            repo: TaskRepository::new(),
        }
    }

    /// Appends a task and returns its stable id.
    pub fn add_task(&mut self, task: Task) -> TaskId {
        let id = self.repo.insert_task(task);
        info!("event=task_add module=tasks status=ok task_id={id}");
        id
    }

    /// Removes the task with `id`.
    pub fn remove_task(&mut self, id: TaskId) -> RepoResult<Task> {
        let removed = self.repo.remove_task(id)?;
        info!("event=task_remove module=tasks status=ok task_id={id}");
        Ok(removed)
    }

    /// Sets the completed flag regardless of its current value.
    pub fn mark_completed(&mut self, id: TaskId) -> RepoResult<()> {
        self.repo.get_task_mut(id)?.mark_completed();
        info!("event=task_complete module=tasks status=ok task_id={id}");
        Ok(())
    }

    /// Replaces title and description of an existing task.
    pub fn update_task(
        &mut self,
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> RepoResult<()> {
        let task = self.repo.get_task_mut(id)?;
        task.title = title.into();
        task.description = description.into();
        info!("event=task_update module=tasks status=ok task_id={id}");
        Ok(())
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.repo.get_task(id)
    }

    pub fn all_tasks(&self) -> Vec<Task> {
        self.repo.list_tasks(&TaskListQuery::default())
    }

    pub fn completed_tasks(&self) -> Vec<Task> {
        self.repo.list_tasks(&TaskListQuery {
            completed: Some(true),
        })
    }

    pub fn pending_tasks(&self) -> Vec<Task> {
        self.repo.list_tasks(&TaskListQuery {
            completed: Some(false),
        })
    }
}
