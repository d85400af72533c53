//! Core domain logic for minidesk.
//! Library lending and task tracking live here; the CLI only wires stdio.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod shell;

pub use logging::{
    default_log_level, flush_logging, init_logging, logging_status, parse_log_level,
};
pub use model::book::{Book, Isbn};
pub use model::task::{Task, TaskId};
pub use model::user::{LoanError, User, UserId};
pub use repo::book_repo::{BookListQuery, BookRepository};
pub use repo::task_repo::{TaskListQuery, TaskRepository};
pub use repo::user_repo::UserRepository;
pub use repo::{RepoError, RepoResult};
pub use service::library_service::{Library, LibraryError, LibraryResult, LoanReceipt};
pub use service::task_service::TaskManager;
pub use shell::{LibraryShell, ShellError, ShellResult, TaskShell};

