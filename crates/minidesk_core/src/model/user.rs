//! Borrower domain model.
//!
//! # Responsibility
//! - Track which books a user has borrowed, by ISBN key.
//! - Drive book availability transitions on borrow/return.
//!
//! # Invariants
//! - `borrowed_isbns` keeps borrow order; one entry per successful borrow.
//! - A failed borrow/return leaves both the user and the book untouched.
//! - A user can borrow any `Book` value, registered in a library or not.
//! - A return succeeds only when the given copy is actually lent out; a
//!   same-ISBN copy still on the shelf does not clear the loan.

use crate::model::book::{Book, Isbn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User id text used as the borrower identity key.
pub type UserId = String;

/// Lending rule violations raised by `User::borrow_book`/`User::return_book`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanError {
    /// The book is currently lent out.
    BookUnavailable { isbn: Isbn, title: String },
    /// The user has no outstanding loan for this book.
    NotBorrowed {
        user_id: UserId,
        user_name: String,
        isbn: Isbn,
        title: String,
    },
    /// The user holds a loan for this ISBN, but the given copy is on the shelf.
    NotLentOut { isbn: Isbn, title: String },
}

impl Display for LoanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookUnavailable { isbn, title } => {
                write!(f, "book `{title}` ({isbn}) is not available for borrowing")
            }
            Self::NotBorrowed {
                user_id,
                isbn,
                title,
                ..
            } => write!(f, "user {user_id} did not borrow `{title}` ({isbn})"),
            Self::NotLentOut { isbn, title } => {
                write!(f, "book `{title}` ({isbn}) is not lent out")
            }
        }
    }
}

impl Error for LoanError {}

/// A registered borrower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    id: UserId,
    borrowed_isbns: Vec<Isbn>,
}

impl User {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            borrowed_isbns: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// ISBNs of outstanding loans, oldest first.
    pub fn borrowed_isbns(&self) -> &[Isbn] {
        &self.borrowed_isbns
    }

    pub fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed_isbns.iter().any(|held| held == isbn)
    }

    /// Borrows `book` when it is available.
    ///
    /// # Errors
    /// - `LoanError::BookUnavailable` when the book is already lent out.
    pub fn borrow_book(&mut self, book: &mut Book) -> Result<(), LoanError> {
        if !book.check_out() {
            return Err(LoanError::BookUnavailable {
                isbn: book.isbn().to_string(),
                title: book.title().to_string(),
            });
        }
        self.borrowed_isbns.push(book.isbn().to_string());
        Ok(())
    }

    /// Returns `book` when this user holds a loan for its ISBN and the copy
    /// is lent out.
    ///
    /// # Errors
    /// - `LoanError::NotBorrowed` when no loan for the ISBN is recorded.
    /// - `LoanError::NotLentOut` when the copy is already available; the
    ///   recorded loan is kept.
    pub fn return_book(&mut self, book: &mut Book) -> Result<(), LoanError> {
        let Some(position) = self
            .borrowed_isbns
            .iter()
            .position(|held| held == book.isbn())
        else {
            return Err(LoanError::NotBorrowed {
                user_id: self.id.clone(),
                user_name: self.name.clone(),
                isbn: book.isbn().to_string(),
                title: book.title().to_string(),
            });
        };

        if !book.check_in() {
            return Err(LoanError::NotLentOut {
                isbn: book.isbn().to_string(),
                title: book.title().to_string(),
            });
        }
        self.borrowed_isbns.remove(position);
        Ok(())
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (id {}), borrowed: [{}]",
            self.name,
            self.id,
            self.borrowed_isbns.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{LoanError, User};
    use crate::model::book::Book;

    #[test]
    fn returning_shelf_copy_with_same_isbn_keeps_the_loan() {
        let mut user = User::new("Alice", "u1");
        let mut lent = Book::new("First Print", "A", "1");
        let mut shelf_copy = Book::new("Second Print", "A", "1");
        user.borrow_book(&mut lent).unwrap();

        let err = user.return_book(&mut shelf_copy).unwrap_err();
        assert_eq!(
            err,
            LoanError::NotLentOut {
                isbn: "1".to_string(),
                title: "Second Print".to_string(),
            }
        );
        assert!(shelf_copy.is_available());
        assert!(!lent.is_available());
        assert_eq!(user.borrowed_isbns(), ["1"]);

        user.return_book(&mut lent).unwrap();
        assert!(lent.is_available());
        assert!(user.borrowed_isbns().is_empty());
    }
}
