//! Book domain model.
//!
//! # Responsibility
//! - Hold catalog metadata for one copy of a book.
//! - Own the availability flag consulted by every borrow attempt.
//!
//! # Invariants
//! - A new book starts available.
//! - Availability flips only via `check_out` (borrow) and `check_in` (return),
//!   both crate-internal, so callers cannot set it directly.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// ISBN text used as the book identity key.
pub type Isbn = String;

/// One lendable book copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: Isbn,
    is_available: bool,
}

impl Book {
    /// Creates an available book.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            is_available: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    /// Marks the book as lent out.
    ///
    /// Returns `false` without changing state when the book is already out.
    pub(crate) fn check_out(&mut self) -> bool {
        if !self.is_available {
            return false;
        }
        self.is_available = false;
        true
    }

    /// Marks the book as back on the shelf.
    ///
    /// Returns `false` without changing state when the book was not out.
    pub(crate) fn check_in(&mut self) -> bool {
        if self.is_available {
            return false;
        }
        self.is_available = true;
        true
    }

    /// Case-insensitive match on title/author, case-sensitive on ISBN.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.author.to_lowercase().contains(&needle)
            || self.isbn.contains(query)
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = if self.is_available {
            "available"
        } else {
            "borrowed"
        };
        write!(
            f,
            "\"{}\" by {} (ISBN {}, {status})",
            self.title, self.author, self.isbn
        )
    }
}
