use minidesk_core::{Book, Library, LibraryError, LoanError, RepoError, User};

fn titles(books: Vec<&Book>) -> Vec<String> {
    books.into_iter().map(|book| book.title().to_string()).collect()
}

fn library_with_dune() -> Library {
    let mut library = Library::new("Test Library");
    library.add_book(Book::new("Dune", "Herbert", "111"));
    library.add_user(User::new("Alice", "u1"));
    library
}

#[test]
fn new_book_is_available() {
    let book = Book::new("Dune", "Herbert", "111");
    assert!(book.is_available());
}

#[test]
fn dune_scenario_borrow_then_return() {
    let mut library = library_with_dune();

    let found = library.find_book("111").unwrap();
    assert_eq!(found.title(), "Dune");

    let receipt = library.borrow_book("u1", "111").unwrap();
    assert_eq!(receipt.user_name, "Alice");
    assert_eq!(receipt.title, "Dune");
    assert!(titles(library.available_books()).is_empty());
    assert_eq!(titles(library.borrowed_books()), vec!["Dune"]);
    assert!(library.find_user("u1").unwrap().has_borrowed("111"));

    library.return_book("u1", "111").unwrap();
    assert_eq!(titles(library.available_books()), vec!["Dune"]);
    assert!(library.borrowed_books().is_empty());
    assert!(library.find_user("u1").unwrap().borrowed_isbns().is_empty());
}

#[test]
fn borrowing_unavailable_book_changes_nothing() {
    let mut library = library_with_dune();
    library.add_user(User::new("Bob", "u2"));
    library.borrow_book("u1", "111").unwrap();

    let err = library.borrow_book("u2", "111").unwrap_err();
    assert_eq!(
        err,
        LibraryError::Loan(LoanError::BookUnavailable {
            isbn: "111".to_string(),
            title: "Dune".to_string(),
        })
    );
    assert!(library.find_user("u2").unwrap().borrowed_isbns().is_empty());
    assert_eq!(library.find_user("u1").unwrap().borrowed_isbns(), ["111"]);
}

#[test]
fn returning_book_not_held_is_rejected() {
    let mut library = library_with_dune();
    library.add_user(User::new("Bob", "u2"));
    library.borrow_book("u1", "111").unwrap();

    let err = library.return_book("u2", "111").unwrap_err();
    assert!(matches!(
        err,
        LibraryError::Loan(LoanError::NotBorrowed { ref user_name, .. }) if user_name == "Bob"
    ));
    assert!(!library.find_book("111").unwrap().is_available());
}

#[test]
fn unknown_user_is_reported_before_unknown_book() {
    let mut library = library_with_dune();

    let err = library.borrow_book("ghost", "999").unwrap_err();
    assert_eq!(
        err,
        LibraryError::Repo(RepoError::UserNotFound("ghost".to_string()))
    );

    let err = library.return_book("u1", "999").unwrap_err();
    assert_eq!(
        err,
        LibraryError::Repo(RepoError::BookNotFound("999".to_string()))
    );
}

#[test]
fn user_can_borrow_book_outside_any_library() {
    let mut user = User::new("Carol", "u3");
    let mut book = Book::new("Loose Copy", "Anon", "42");

    user.borrow_book(&mut book).unwrap();
    assert!(!book.is_available());
    assert_eq!(user.borrowed_isbns(), ["42"]);

    let err = user.borrow_book(&mut book).unwrap_err();
    assert!(matches!(err, LoanError::BookUnavailable { .. }));
    assert_eq!(user.borrowed_isbns().len(), 1);

    user.return_book(&mut book).unwrap();
    assert!(book.is_available());
    assert!(user.borrowed_isbns().is_empty());
}

#[test]
fn search_is_case_insensitive_on_title_and_author() {
    let mut library = Library::new("Search");
    library.add_book(Book::new("Dune", "Frank Herbert", "978-0441"));
    library.add_book(Book::new("Neuromancer", "William Gibson", "978-0305"));
    library.add_book(Book::new("Children of Dune", "Frank Herbert", "978-0593"));

    assert_eq!(
        titles(library.search_books("DUNE")),
        vec!["Dune", "Children of Dune"]
    );
    assert_eq!(titles(library.search_books("gibson")), vec!["Neuromancer"]);
    assert_eq!(titles(library.search_books("0305")), vec!["Neuromancer"]);
    assert!(library.search_books("tolkien").is_empty());
    assert_eq!(library.search_books("").len(), 3);
}

#[test]
fn duplicate_isbns_resolve_to_first_entry() {
    let mut library = Library::new("Dupes");
    library.add_book(Book::new("First Print", "A", "1"));
    library.add_book(Book::new("Second Print", "A", "1"));

    assert_eq!(library.book_count(), 2);
    assert_eq!(library.find_book("1").unwrap().title(), "First Print");

    let removed = library.remove_book("1").unwrap();
    assert_eq!(removed.title(), "First Print");
    assert_eq!(library.find_book("1").unwrap().title(), "Second Print");
}

#[test]
fn remove_missing_book_and_user_report_not_found() {
    let mut library = library_with_dune();

    assert_eq!(
        library.remove_book("404").unwrap_err(),
        RepoError::BookNotFound("404".to_string())
    );
    assert_eq!(
        library.remove_user("404").unwrap_err(),
        RepoError::UserNotFound("404".to_string())
    );

    let removed = library.remove_user("u1").unwrap();
    assert_eq!(removed.name(), "Alice");
    assert!(library.find_user("u1").is_none());
    assert_eq!(library.user_count(), 0);
}

#[test]
fn books_borrowed_by_follows_borrow_order() {
    let mut library = library_with_dune();
    library.add_book(Book::new("Emma", "Austen", "222"));
    library.borrow_book("u1", "222").unwrap();
    library.borrow_book("u1", "111").unwrap();

    let loans = titles(library.books_borrowed_by("u1").unwrap());
    assert_eq!(loans, vec!["Emma", "Dune"]);
    assert_eq!(
        library.to_string(),
        "Test Library: 2 books, 1 users"
    );
}

#[test]
fn return_after_lent_copy_removed_keeps_the_loan() {
    let mut library = Library::new("Dupes");
    library.add_book(Book::new("First Print", "A", "1"));
    library.add_book(Book::new("Second Print", "A", "1"));
    library.add_user(User::new("Alice", "u1"));
    library.borrow_book("u1", "1").unwrap();
    library.remove_book("1").unwrap();

    let err = library.return_book("u1", "1").unwrap_err();
    assert_eq!(
        err,
        LibraryError::Loan(LoanError::NotLentOut {
            isbn: "1".to_string(),
            title: "Second Print".to_string(),
        })
    );
    assert_eq!(library.find_user("u1").unwrap().borrowed_isbns(), ["1"]);
    assert!(library.find_book("1").unwrap().is_available());
}
