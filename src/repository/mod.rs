//! Repository layer for the in-memory stores.
//!
//! All collections live in a single [`Library`] behind one `RwLock`. The
//! per-entity repositories share that lock, so a cross-store operation (the
//! lending workflow, forced deletes) runs under a single write guard and
//! commits all of its mutations or none of them.

pub mod books;
pub mod loans;
pub mod members;

use std::sync::{Arc, RwLock};

use chrono::{NaiveDate, Utc};

use crate::models::{Book, Member, MemberStatus, MembershipType};

/// In-memory library state. Collections keep insertion order.
#[derive(Debug, Default)]
pub struct Library {
    pub(crate) books: Vec<Book>,
    pub(crate) members: Vec<Member>,
}

impl Library {
    /// Demo catalog and members matching the original mock data set
    pub fn demo() -> Self {
        let now = Utc::now();
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date");

        let book = |id, title: &str, author: &str, isbn: &str, year, total, available, description: &str| Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publisher: None,
            genre: None,
            description: Some(description.to_string()),
            published_year: year,
            total_copies: total,
            available_copies: available,
            maintenance: false,
            loan: None,
            created_at: now,
            updated_at: now,
        };

        let books = vec![
            book(1, "The Great Gatsby", "F. Scott Fitzgerald", "9780743273565", 1925, 5, 3,
                "A classic novel of the Jazz Age"),
            book(2, "To Kill a Mockingbird", "Harper Lee", "9780061120084", 1960, 3, 1,
                "A gripping tale of racial injustice"),
            book(3, "1984", "George Orwell", "9780451524935", 1949, 4, 0,
                "Dystopian social science fiction novel"),
            book(4, "Pride and Prejudice", "Jane Austen", "9780141439518", 1813, 2, 2,
                "A romantic novel of manners"),
        ];

        let member = |id, name: &str, email: &str, phone: &str, since, borrowed| Member {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            membership_date: since,
            membership_type: MembershipType::Standard,
            status: MemberStatus::Active,
            borrowed_books: borrowed,
            created_at: now,
            updated_at: now,
        };

        let members = vec![
            member(1, "John Doe", "john@example.com", "+1234567890", date(2023, 1, 15), 2),
            member(2, "Jane Smith", "jane@example.com", "+1234567891", date(2023, 2, 20), 0),
        ];

        Self { books, members }
    }
}

/// Main repository struct holding the shared library state
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create a new repository over the given initial state
    pub fn new(library: Library) -> Self {
        let state = Arc::new(RwLock::new(library));
        Self {
            books: books::BooksRepository::new(state.clone()),
            members: members::MembersRepository::new(state.clone()),
            loans: loans::LoansRepository::new(state),
        }
    }

    /// Empty repository, mostly for tests
    pub fn in_memory() -> Self {
        Self::new(Library::default())
    }
}
