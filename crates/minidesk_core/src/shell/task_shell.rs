//! Task tracker menu.
//!
//! # Invariants
//! - Numeric input is not re-prompted: a non-integer line stops the shell
//!   with `ShellError::InvalidNumber`.
//! - Task selection numbers are 1-based positions in the listing just shown.

use crate::model::task::Task;
use crate::service::task_service::TaskManager;
use crate::shell::{Console, ShellResult, Step};
use std::io::{BufRead, Write};

const MENU: &[&str] = &[
    "",
    "--- Task Management System ---",
    "1. Add a new task",
    "2. Mark a task as completed",
    "3. Remove a task",
    "4. View all tasks",
    "5. View completed tasks",
    "6. View pending tasks",
    "7. Exit",
];

/// Interactive front end for a `TaskManager`.
pub struct TaskShell<R, W> {
    manager: TaskManager,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> TaskShell<R, W> {
    pub fn new(manager: TaskManager, input: R, output: W) -> Self {
        Self {
            manager,
            console: Console::new(input, output),
        }
    }

    pub fn manager(&self) -> &TaskManager {
        &self.manager
    }

    pub fn into_parts(self) -> (TaskManager, W) {
        let (_, output) = self.console.into_parts();
        (self.manager, output)
    }

    /// Runs the menu loop until exit or end of input.
    ///
    /// # Errors
    /// - `ShellError::InvalidNumber` on any non-integer numeric answer.
    /// - `ShellError::Io` when the console streams fail.
    pub fn run(&mut self) -> ShellResult<()> {
        loop {
            for line in MENU {
                self.console.say(line)?;
            }
            let Some(choice) = self.console.ask_number_strict("Enter your choice: ")? else {
                return Ok(());
            };

            let step = match choice {
                1 => self.add_task()?,
                2 => self.mark_task_completed()?,
                3 => self.remove_task()?,
                4 => self.show("All tasks:", "No tasks found.", self.manager.all_tasks())?,
                5 => self.show(
                    "Completed tasks:",
                    "No completed tasks found.",
                    self.manager.completed_tasks(),
                )?,
                6 => self.show(
                    "Pending tasks:",
                    "No pending tasks found.",
                    self.manager.pending_tasks(),
                )?,
                7 => {
                    self.console.say("Exiting the program. Goodbye!")?;
                    Step::Quit
                }
                _ => {
                    self.console.say("Invalid choice. Please try again.")?;
                    Step::Continue
                }
            };

            if step == Step::Quit {
                return Ok(());
            }
        }
    }

    fn add_task(&mut self) -> ShellResult<Step> {
        let Some(title) = self.console.ask("Enter task title: ")? else {
            return Ok(Step::Quit);
        };
        let Some(description) = self.console.ask("Enter task description: ")? else {
            return Ok(Step::Quit);
        };

        self.manager.add_task(Task::new(title, description));
        self.console.say("Task added successfully!")?;
        Ok(Step::Continue)
    }

    fn mark_task_completed(&mut self) -> ShellResult<Step> {
        let pending = self.manager.pending_tasks();
        if pending.is_empty() {
            self.console.say("No pending tasks to mark as completed.")?;
            return Ok(Step::Continue);
        }

        self.console.say("Pending tasks:")?;
        let Some(task) =
            self.pick(&pending, "Enter the number of the task to mark as completed: ")?
        else {
            return Ok(Step::Quit);
        };

        match task.and_then(|task| self.manager.mark_completed(task.id).ok()) {
            Some(()) => self.console.say("Task marked as completed!")?,
            None => self.console.say("Invalid task number.")?,
        }
        Ok(Step::Continue)
    }

    fn remove_task(&mut self) -> ShellResult<Step> {
        let all = self.manager.all_tasks();
        if all.is_empty() {
            self.console.say("No tasks to remove.")?;
            return Ok(Step::Continue);
        }

        self.console.say("All tasks:")?;
        let Some(task) = self.pick(&all, "Enter the number of the task to remove: ")? else {
            return Ok(Step::Quit);
        };

        match task.and_then(|task| self.manager.remove_task(task.id).ok()) {
            Some(_) => self.console.say("Task removed successfully!")?,
            None => self.console.say("Invalid task number.")?,
        }
        Ok(Step::Continue)
    }

    /// Prints a numbered listing and reads a 1-based selection.
    ///
    /// Outer `None` means end of input; inner `None` means out of range.
    fn pick<'a>(
        &mut self,
        tasks: &'a [Task],
        prompt: &str,
    ) -> ShellResult<Option<Option<&'a Task>>> {
        for (index, task) in tasks.iter().enumerate() {
            self.console.say(format!("{}. {}", index + 1, task.title))?;
        }
        let Some(number) = self.console.ask_number_strict(prompt)? else {
            return Ok(None);
        };

        let selected = usize::try_from(number)
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| tasks.get(index));
        Ok(Some(selected))
    }

    fn show(&mut self, heading: &str, empty: &str, tasks: Vec<Task>) -> ShellResult<Step> {
        if tasks.is_empty() {
            self.console.say(empty)?;
            return Ok(Step::Continue);
        }
        self.console.say(heading)?;
        for task in &tasks {
            self.console.say(task)?;
        }
        Ok(Step::Continue)
    }
}
