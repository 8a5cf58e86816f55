//! Loans repository: cross-store lending operations.
//!
//! Borrowing touches both the catalog (copy counter, loan fields) and the
//! membership store (borrow counter). Every operation here takes one write
//! guard over the whole library, so both mutations commit together or not
//! at all.

use std::sync::{Arc, RwLock, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{loan::is_overdue, ActiveLoan, Book, LoanInfo, MemberStatus},
    repository::Library,
};

#[derive(Clone)]
pub struct LoansRepository {
    state: Arc<RwLock<Library>>,
}

impl LoansRepository {
    pub fn new(state: Arc<RwLock<Library>>) -> Self {
        Self { state }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Library> {
        self.state.write().expect("library lock poisoned")
    }

    /// Borrow a book for a member.
    ///
    /// Validates everything before mutating anything: the member must exist
    /// and be active, the book must exist with a copy available and no other
    /// active loan. Only then are the copy counter, the loan fields and the
    /// member counter updated.
    pub fn borrow(
        &self,
        book_id: i32,
        member_id: i32,
        borrower_name: &str,
        due_date: NaiveDate,
    ) -> AppResult<Book> {
        let mut library = self.write();

        let member_index = library
            .members
            .iter()
            .position(|m| m.id == member_id)
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", member_id)))?;

        if library.members[member_index].status == MemberStatus::Inactive {
            return Err(AppError::Conflict(format!(
                "Membership {} is inactive and can not borrow",
                member_id
            )));
        }

        let book_index = library
            .books
            .iter()
            .position(|b| b.id == book_id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;

        {
            let book = &library.books[book_index];
            if !book.is_available() {
                return Err(AppError::Unavailable(format!(
                    "No copies of \"{}\" are available for borrowing",
                    book.title
                )));
            }
        }

        let now = Utc::now();

        let book = &mut library.books[book_index];
        book.available_copies -= 1;
        book.loan = Some(LoanInfo {
            borrowed_by: member_id,
            borrower_name: borrower_name.to_string(),
            borrowed_date: now.date_naive(),
            due_date,
        });
        book.updated_at = now;
        let borrowed = book.clone();

        let member = &mut library.members[member_index];
        member.borrowed_books += 1;
        member.updated_at = now;

        Ok(borrowed)
    }

    /// Return a borrowed book: clear the loan, put the copy back and
    /// decrement the borrower's counter. Reports whether the loan was
    /// overdue at return time.
    pub fn return_book(&self, book_id: i32) -> AppResult<(Book, bool)> {
        let mut library = self.write();

        let book_index = library
            .books
            .iter()
            .position(|b| b.id == book_id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;

        let book = &mut library.books[book_index];
        let loan = book
            .loan
            .take()
            .ok_or_else(|| AppError::Conflict(format!("Book with id {} has no active loan", book_id)))?;

        let now = Utc::now();
        book.available_copies = (book.available_copies + 1).min(book.total_copies);
        book.updated_at = now;
        let returned = book.clone();

        // The borrower may have been force-deleted since the loan was taken
        if let Some(member) = library.members.iter_mut().find(|m| m.id == loan.borrowed_by) {
            member.borrowed_books = (member.borrowed_books - 1).max(0);
            member.updated_at = now;
        }

        Ok((returned, is_overdue(loan.due_date)))
    }

    /// All active loans, in catalog order
    pub fn list_active(&self) -> Vec<ActiveLoan> {
        let library = self.state.read().expect("library lock poisoned");
        library
            .books
            .iter()
            .filter_map(|book| {
                book.loan.as_ref().map(|loan| ActiveLoan {
                    book_id: book.id,
                    title: book.title.clone(),
                    borrowed_by: loan.borrowed_by,
                    borrower_name: loan.borrower_name.clone(),
                    borrowed_date: loan.borrowed_date,
                    due_date: loan.due_date,
                    is_overdue: is_overdue(loan.due_date),
                })
            })
            .collect()
    }
}
