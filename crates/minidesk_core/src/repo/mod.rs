//! In-memory keyed storage for books, users and tasks.
//!
//! # Responsibility
//! - Provide keyed lookup and removal over insertion-ordered lists.
//! - Keep list ordering rules inside the storage boundary.
//!
//! # Invariants
//! - Every listing preserves insertion order.
//! - Lookups by key return the first matching entry; duplicates are allowed.
//! - Missing keys on mutation paths surface as `RepoError` variants.

use crate::model::book::Isbn;
use crate::model::task::TaskId;
use crate::model::user::UserId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod book_repo;
pub mod task_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Keyed lookup failures shared by all repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    BookNotFound(Isbn),
    UserNotFound(UserId),
    TaskNotFound(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookNotFound(isbn) => write!(f, "book not found: {isbn}"),
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for RepoError {}
