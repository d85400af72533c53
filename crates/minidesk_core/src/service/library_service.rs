//! Library use-case service.
//!
//! # Responsibility
//! - Register books and users, and answer catalog queries.
//! - Route borrow/return requests by key to the user and book involved.
//!
//! # Invariants
//! - The book's availability flag is the single source of truth for lending.
//! - Listings preserve catalog insertion order.
//! - Duplicate ISBNs and user ids are accepted; lookups take the first match.

use crate::model::book::{Book, Isbn};
use crate::model::user::{LoanError, User, UserId};
use crate::repo::book_repo::{BookListQuery, BookRepository};
use crate::repo::user_repo::UserRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LibraryResult<T> = Result<T, LibraryError>;

/// Service error for lending use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// User or book key did not resolve.
    Repo(RepoError),
    /// Lending rule rejected the request.
    Loan(LoanError),
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Loan(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LibraryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Loan(err) => Some(err),
        }
    }
}

impl From<RepoError> for LibraryError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<LoanError> for LibraryError {
    fn from(value: LoanError) -> Self {
        Self::Loan(value)
    }
}

/// Summary of a completed borrow or return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanReceipt {
    pub user_id: UserId,
    pub user_name: String,
    pub isbn: Isbn,
    pub title: String,
}

impl LoanReceipt {
    fn new(user: &User, book: &Book) -> Self {
        Self {
            user_id: user.id().to_string(),
            user_name: user.name().to_string(),
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
        }
    }
}

/// Book and user registry.
pub struct Library {
    name: String,
    books: BookRepository,
    users: UserRepository,
}

impl Library {
    /// Creates an empty library.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: BookRepository::new(),
            users: UserRepository::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn book_count(&self) -> usize {
        self.books.book_count()
    }

    pub fn user_count(&self) -> usize {
        self.users.user_count()
    }

    /// Appends a book to the catalog. Duplicate ISBNs are kept.
    pub fn add_book(&mut self, book: Book) {
        info!(
            "event=book_add module=library status=ok isbn={}",
            book.isbn()
        );
        self.books.insert_book(book);
    }

    /// Removes the first book with `isbn`.
    ///
    /// Loans recorded on users are left untouched.
    pub fn remove_book(&mut self, isbn: &str) -> RepoResult<Book> {
        let removed = self.books.remove_book(isbn)?;
        info!("event=book_remove module=library status=ok isbn={isbn}");
        Ok(removed)
    }

    pub fn find_book(&self, isbn: &str) -> Option<&Book> {
        self.books.get_book(isbn)
    }

    /// Title/author substring match ignoring case, or ISBN substring match.
    ///
    /// Never fails; no match yields an empty list and an empty query
    /// matches every book.
    pub fn search_books(&self, query: &str) -> Vec<&Book> {
        self.books
            .list_books(&BookListQuery::default())
            .into_iter()
            .filter(|book| book.matches_query(query))
            .collect()
    }

    pub fn available_books(&self) -> Vec<&Book> {
        self.books.list_books(&BookListQuery {
            available: Some(true),
        })
    }

    pub fn borrowed_books(&self) -> Vec<&Book> {
        self.books.list_books(&BookListQuery {
            available: Some(false),
        })
    }

    /// Appends a user to the registry. Duplicate ids are kept.
    pub fn add_user(&mut self, user: User) {
        info!(
            "event=user_add module=library status=ok user_id={}",
            user.id()
        );
        self.users.insert_user(user);
    }

    /// Removes the first user with `id`.
    pub fn remove_user(&mut self, id: &str) -> RepoResult<User> {
        let removed = self.users.remove_user(id)?;
        info!("event=user_remove module=library status=ok user_id={id}");
        Ok(removed)
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.get_user(id)
    }

    /// Resolves a user's outstanding loans to catalog books, oldest first.
    ///
    /// ISBNs no longer in the catalog are skipped.
    pub fn books_borrowed_by(&self, user_id: &str) -> RepoResult<Vec<&Book>> {
        let user = self
            .users
            .get_user(user_id)
            .ok_or_else(|| RepoError::UserNotFound(user_id.to_string()))?;
        Ok(user
            .borrowed_isbns()
            .iter()
            .filter_map(|isbn| self.books.get_book(isbn))
            .collect())
    }

    /// Lends the book `isbn` to the user `user_id`.
    ///
    /// # Errors
    /// - `RepoError::UserNotFound`, checked before the book.
    /// - `RepoError::BookNotFound`.
    /// - `LoanError::BookUnavailable` when the book is already lent out.
    pub fn borrow_book(&mut self, user_id: &str, isbn: &str) -> LibraryResult<LoanReceipt> {
        let user = self
            .users
            .get_user_mut(user_id)
            .ok_or_else(|| RepoError::UserNotFound(user_id.to_string()))?;
        let book = self
            .books
            .get_book_mut(isbn)
            .ok_or_else(|| RepoError::BookNotFound(isbn.to_string()))?;

        if let Err(err) = user.borrow_book(book) {
            info!(
                "event=book_borrow module=library status=rejected isbn={isbn} user_id={user_id}"
            );
            return Err(err.into());
        }

        info!("event=book_borrow module=library status=ok isbn={isbn} user_id={user_id}");
        Ok(LoanReceipt::new(user, book))
    }

    /// Takes the book `isbn` back from the user `user_id`.
    ///
    /// # Errors
    /// - `RepoError::UserNotFound`, checked before the book.
    /// - `RepoError::BookNotFound`.
    /// - `LoanError::NotBorrowed` when the user holds no loan for `isbn`.
    /// - `LoanError::NotLentOut` when the first catalog copy for `isbn` is on
    ///   the shelf, e.g. after the lent copy was removed from the catalog.
    pub fn return_book(&mut self, user_id: &str, isbn: &str) -> LibraryResult<LoanReceipt> {
        let user = self
            .users
            .get_user_mut(user_id)
            .ok_or_else(|| RepoError::UserNotFound(user_id.to_string()))?;
        let book = self
            .books
            .get_book_mut(isbn)
            .ok_or_else(|| RepoError::BookNotFound(isbn.to_string()))?;

        if let Err(err) = user.return_book(book) {
            info!(
                "event=book_return module=library status=rejected isbn={isbn} user_id={user_id}"
            );
            return Err(err.into());
        }

        info!("event=book_return module=library status=ok isbn={isbn} user_id={user_id}");
        Ok(LoanReceipt::new(user, book))
    }
}

impl Display for Library {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} books, {} users",
            self.name,
            self.book_count(),
            self.user_count()
        )
    }
}
