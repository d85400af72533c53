//! Insertion-ordered book catalog.

use crate::model::book::Book;
use crate::repo::{RepoError, RepoResult};

/// Query options for listing books.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookListQuery {
    /// `Some(true)` keeps available books, `Some(false)` keeps lent-out ones.
    pub available: Option<bool>,
}

/// `Vec`-backed book storage.
#[derive(Debug, Clone, Default)]
pub struct BookRepository {
    books: Vec<Book>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes the first book with `isbn`.
    pub fn remove_book(&mut self, isbn: &str) -> RepoResult<Book> {
        let position = self
            .books
            .iter()
            .position(|book| book.isbn() == isbn)
            .ok_or_else(|| RepoError::BookNotFound(isbn.to_string()))?;
        Ok(self.books.remove(position))
    }

    pub fn get_book(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn() == isbn)
    }

    pub fn get_book_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.isbn() == isbn)
    }

    pub fn list_books(&self, query: &BookListQuery) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| query.available.map_or(true, |want| book.is_available() == want))
            .collect()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{BookListQuery, BookRepository};
    use crate::model::book::Book;
    use crate::repo::RepoError;

    #[test]
    fn remove_takes_first_duplicate_only() {
        let mut repo = BookRepository::new();
        repo.insert_book(Book::new("First", "A", "1"));
        repo.insert_book(Book::new("Second", "B", "1"));

        let removed = repo.remove_book("1").unwrap();
        assert_eq!(removed.title(), "First");
        assert_eq!(repo.get_book("1").unwrap().title(), "Second");
    }

    #[test]
    fn remove_missing_returns_not_found() {
        let mut repo = BookRepository::new();
        let err = repo.remove_book("404").unwrap_err();
        assert_eq!(err, RepoError::BookNotFound("404".to_string()));
    }

    #[test]
    fn list_filters_by_availability_in_order() {
        let mut repo = BookRepository::new();
        repo.insert_book(Book::new("A", "x", "1"));
        repo.insert_book(Book::new("B", "x", "2"));
        repo.insert_book(Book::new("C", "x", "3"));
        repo.get_book_mut("2").unwrap().check_out();

        let available: Vec<_> = repo
            .list_books(&BookListQuery {
                available: Some(true),
            })
            .into_iter()
            .map(|book| book.isbn().to_string())
            .collect();
        assert_eq!(available, vec!["1", "3"]);
        assert_eq!(repo.list_books(&BookListQuery::default()).len(), 3);
    }
}
