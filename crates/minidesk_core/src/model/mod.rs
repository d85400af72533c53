//! Domain records for the library and task trackers.
//!
//! # Responsibility
//! - Define the entities mutated by the registries and shells.
//! - Keep entity-level invariants next to the data they protect.
//!
//! # Invariants
//! - Books are identified by ISBN, users by id, tasks by a generated `TaskId`.
//! - A book's availability only changes through borrow/return.

pub mod book;
pub mod task;
pub mod user;
