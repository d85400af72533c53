//! Library lending menu.
//!
//! # Invariants
//! - Non-numeric menu input is reported and re-prompted.
//! - Borrow/return resolve the user before the book.

use crate::model::book::Book;
use crate::model::user::{LoanError, User};
use crate::repo::RepoError;
use crate::service::library_service::{Library, LibraryError};
use crate::shell::{Console, ShellResult, Step};
use std::io::{BufRead, Write};

const MENU: &[&str] = &[
    "",
    "--- Library Management System ---",
    "1. Add a book",
    "2. Remove a book",
    "3. Search for books",
    "4. Add a user",
    "5. Remove a user",
    "6. Borrow a book",
    "7. Return a book",
    "8. List available books",
    "9. List borrowed books",
    "10. Find a user",
    "0. Exit",
];

/// Interactive front end for a `Library`.
pub struct LibraryShell<R, W> {
    library: Library,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> LibraryShell<R, W> {
    pub fn new(library: Library, input: R, output: W) -> Self {
        Self {
            library,
            console: Console::new(input, output),
        }
    }

    /// Releases the library state and the output sink.
    pub fn into_parts(self) -> (Library, W) {
        let (_, output) = self.console.into_parts();
        (self.library, output)
    }

    /// Runs the menu loop until exit or end of input.
    pub fn run(&mut self) -> ShellResult<()> {
        loop {
            for line in MENU {
                self.console.say(line)?;
            }
            let Some(choice) = self.console.ask_number_retrying("Enter your choice: ")? else {
                return Ok(());
            };

            let step = match choice {
                1 => self.add_book()?,
                2 => self.remove_book()?,
                3 => self.search_books()?,
                4 => self.add_user()?,
                5 => self.remove_user()?,
                6 => self.borrow_book()?,
                7 => self.return_book()?,
                8 => self.list_available_books()?,
                9 => self.list_borrowed_books()?,
                10 => self.find_user()?,
                0 => Step::Quit,
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

    fn add_book(&mut self) -> ShellResult<Step> {
        let Some(title) = self.console.ask("Enter book title: ")? else {
            return Ok(Step::Quit);
        };
        let Some(author) = self.console.ask("Enter book author: ")? else {
            return Ok(Step::Quit);
        };
        let Some(isbn) = self.console.ask("Enter book ISBN: ")? else {
            return Ok(Step::Quit);
        };

        self.library.add_book(Book::new(title.as_str(), author, isbn));
        self.console.say(format!("Added book: {title}"))?;
        Ok(Step::Continue)
    }

    fn remove_book(&mut self) -> ShellResult<Step> {
        let Some(isbn) = self.console.ask("Enter ISBN of the book to remove: ")? else {
            return Ok(Step::Quit);
        };

        match self.library.remove_book(&isbn) {
            Ok(book) => self.console.say(format!("Removed book: {}", book.title()))?,
            Err(_) => self.console.say("Book not found.")?,
        }
        Ok(Step::Continue)
    }

    fn search_books(&mut self) -> ShellResult<Step> {
        let Some(query) = self.console.ask("Enter search query: ")? else {
            return Ok(Step::Quit);
        };

        let results = self.library.search_books(&query);
        if results.is_empty() {
            self.console.say("No books found matching the query.")?;
        } else {
            self.console.say("Search results:")?;
            for book in results {
                self.console.say(book)?;
            }
        }
        Ok(Step::Continue)
    }

    fn add_user(&mut self) -> ShellResult<Step> {
        let Some(name) = self.console.ask("Enter user name: ")? else {
            return Ok(Step::Quit);
        };
        let Some(id) = self.console.ask("Enter user id: ")? else {
            return Ok(Step::Quit);
        };

        self.library.add_user(User::new(name.as_str(), id));
        self.console.say(format!("Added user: {name}"))?;
        Ok(Step::Continue)
    }

    fn remove_user(&mut self) -> ShellResult<Step> {
        let Some(id) = self.console.ask("Enter id of the user to remove: ")? else {
            return Ok(Step::Quit);
        };

        match self.library.remove_user(&id) {
            Ok(user) => self.console.say(format!("Removed user: {}", user.name()))?,
            Err(_) => self.console.say("User not found.")?,
        }
        Ok(Step::Continue)
    }

    fn find_user(&mut self) -> ShellResult<Step> {
        let Some(id) = self.console.ask("Enter the user id: ")? else {
            return Ok(Step::Quit);
        };

        let Some(user) = self.library.find_user(&id) else {
            self.console.say("No user with this id exists.")?;
            return Ok(Step::Continue);
        };
        let user_line = user.to_string();
        let loans: Vec<String> = self
            .library
            .books_borrowed_by(&id)
            .unwrap_or_default()
            .into_iter()
            .map(|book| format!("  {book}"))
            .collect();

        self.console.say("Search results:")?;
        self.console.say(user_line)?;
        for loan in loans {
            self.console.say(loan)?;
        }
        Ok(Step::Continue)
    }

    fn borrow_book(&mut self) -> ShellResult<Step> {
        let Some((user_id, isbn)) = self.ask_loan_keys("borrow")? else {
            return Ok(Step::Quit);
        };
        let Some(isbn) = isbn else {
            return Ok(Step::Continue);
        };

        match self.library.borrow_book(&user_id, &isbn) {
            Ok(receipt) => self.console.say(format!(
                "{} has borrowed: {}",
                receipt.user_name, receipt.title
            ))?,
            Err(err) => self.report(&err)?,
        }
        Ok(Step::Continue)
    }

    fn return_book(&mut self) -> ShellResult<Step> {
        let Some((user_id, isbn)) = self.ask_loan_keys("return")? else {
            return Ok(Step::Quit);
        };
        let Some(isbn) = isbn else {
            return Ok(Step::Continue);
        };

        match self.library.return_book(&user_id, &isbn) {
            Ok(receipt) => self.console.say(format!(
                "{} has returned: {}",
                receipt.user_name, receipt.title
            ))?,
            Err(err) => self.report(&err)?,
        }
        Ok(Step::Continue)
    }

    /// Prompts for user id then ISBN, stopping early on an unknown user.
    ///
    /// Outer `None` means end of input; inner `None` means the user was
    /// not found and the handler should return to the menu.
    fn ask_loan_keys(&mut self, verb: &str) -> ShellResult<Option<(String, Option<String>)>> {
        let Some(user_id) = self
            .console
            .ask(&format!("Enter id of the user who wants to {verb} a book: "))?
        else {
            return Ok(None);
        };
        if self.library.find_user(&user_id).is_none() {
            self.console.say("User not found.")?;
            return Ok(Some((user_id, None)));
        }

        let Some(isbn) = self
            .console
            .ask(&format!("Enter the ISBN of the book to {verb}: "))?
        else {
            return Ok(None);
        };
        Ok(Some((user_id, Some(isbn))))
    }

    fn report(&mut self, err: &LibraryError) -> ShellResult<()> {
        match err {
            LibraryError::Repo(RepoError::UserNotFound(_)) => self.console.say("User not found."),
            LibraryError::Repo(_) => self.console.say("Book not found."),
            LibraryError::Loan(LoanError::BookUnavailable { title, .. }) => self
                .console
                .say(format!("Sorry, {title} is not available for borrowing.")),
            LibraryError::Loan(LoanError::NotBorrowed {
                user_name, title, ..
            }) => self
                .console
                .say(format!("{user_name} did not borrow: {title}")),
            LibraryError::Loan(LoanError::NotLentOut { title, .. }) => self
                .console
                .say(format!("{title} is not currently lent out.")),
        }
    }

    fn list_available_books(&mut self) -> ShellResult<Step> {
        let lines: Vec<String> = self
            .library
            .available_books()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        self.console.say("Here are the available books:")?;
        for line in lines {
            self.console.say(line)?;
        }
        Ok(Step::Continue)
    }

    fn list_borrowed_books(&mut self) -> ShellResult<Step> {
        let lines: Vec<String> = self
            .library
            .borrowed_books()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        self.console.say("Here are the borrowed books:")?;
        for line in lines {
            self.console.say(line)?;
        }
        Ok(Step::Continue)
    }
}
