//! Lending workflow service.
//!
//! The one place where the catalog and membership stores are mutated
//! together. Input validation happens here; the repository performs the
//! two-store update under a single lock.

use chrono::{NaiveDate, Utc};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{loan, ActiveLoan, Book, BorrowRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct LendingService {
    repository: Repository,
}

impl LendingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a book for a member. Returns the updated book record and a
    /// confirmation message.
    pub fn borrow(&self, book_id: i32, request: BorrowRequest) -> AppResult<(Book, String)> {
        request.validate()?;

        if request.due_date < Utc::now().date_naive() {
            return Err(AppError::Validation(
                "Due date must not be in the past".to_string(),
            ));
        }

        let book = self.repository.loans.borrow(
            book_id,
            request.member_id,
            &request.member_name,
            request.due_date,
        )?;

        tracing::info!(
            "Lending: book id={} borrowed by member id={} until {}",
            book.id,
            request.member_id,
            request.due_date
        );

        let message = format!(
            "Book \"{}\" successfully borrowed by {}",
            book.title, request.member_name
        );
        Ok((book, message))
    }

    /// Return a borrowed book. Returns the updated record and a message
    /// noting an overdue return.
    pub fn return_book(&self, book_id: i32) -> AppResult<(Book, String)> {
        let (book, was_overdue) = self.repository.loans.return_book(book_id)?;

        tracing::info!(
            "Lending: book id={} returned (overdue={})",
            book.id,
            was_overdue
        );

        let message = if was_overdue {
            format!("Book \"{}\" returned late", book.title)
        } else {
            format!("Book \"{}\" returned", book.title)
        };
        Ok((book, message))
    }

    /// All active loans with their overdue flags
    pub fn list_loans(&self) -> Vec<ActiveLoan> {
        self.repository.loans.list_active()
    }

    /// True iff the due date is strictly before today
    pub fn is_overdue(&self, due_date: NaiveDate) -> bool {
        loan::is_overdue(due_date)
    }
}
