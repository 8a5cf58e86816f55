//! Books repository: the catalog store

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookInput},
    repository::Library,
};

#[derive(Clone)]
pub struct BooksRepository {
    state: Arc<RwLock<Library>>,
}

impl BooksRepository {
    pub fn new(state: Arc<RwLock<Library>>) -> Self {
        Self { state }
    }

    fn read(&self) -> RwLockReadGuard<'_, Library> {
        self.state.read().expect("library lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Library> {
        self.state.write().expect("library lock poisoned")
    }

    /// Full catalog in insertion order
    pub fn list(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    /// Get book by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.read()
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Create a new book. The ID is the current max plus one, and every copy
    /// starts available.
    pub fn create(&self, input: &BookInput) -> AppResult<Book> {
        let mut library = self.write();
        let id = library.books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let now = Utc::now();

        let book = Book {
            id,
            title: input.title.clone(),
            author: input.author.clone(),
            isbn: input.isbn.clone(),
            publisher: input.publisher.clone(),
            genre: input.genre.clone(),
            description: input.description.clone(),
            published_year: input.published_year,
            total_copies: input.total_copies,
            available_copies: input.total_copies,
            maintenance: input.maintenance,
            loan: None,
            created_at: now,
            updated_at: now,
        };

        library.books.push(book.clone());
        Ok(book)
    }

    /// Replace the input-carried fields of an existing book, preserving its
    /// ID, loan state and creation time. The available count is recomputed so
    /// the number of checked-out copies stays the same across the update.
    pub fn update(&self, id: i32, input: &BookInput) -> AppResult<Book> {
        let mut library = self.write();
        let book = library
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        let checked_out = (book.total_copies - book.available_copies).max(0);

        book.title = input.title.clone();
        book.author = input.author.clone();
        book.isbn = input.isbn.clone();
        book.publisher = input.publisher.clone();
        book.genre = input.genre.clone();
        book.description = input.description.clone();
        book.published_year = input.published_year;
        book.total_copies = input.total_copies;
        book.available_copies = (input.total_copies - checked_out).clamp(0, input.total_copies);
        book.maintenance = input.maintenance;
        book.updated_at = Utc::now();

        Ok(book.clone())
    }

    /// Delete a book. Blocked while an active loan exists unless `force` is
    /// set, in which case the loan is cascade-cleared and the borrower's
    /// counter decremented under the same lock.
    pub fn delete(&self, id: i32, force: bool) -> AppResult<()> {
        let mut library = self.write();
        let index = library
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        if let Some(loan) = library.books[index].loan.clone() {
            if !force {
                return Err(AppError::Conflict(format!(
                    "Book with id {} has an active loan; resend with force=true to delete it",
                    id
                )));
            }
            if let Some(member) = library.members.iter_mut().find(|m| m.id == loan.borrowed_by) {
                member.borrowed_books = (member.borrowed_books - 1).max(0);
                member.updated_at = Utc::now();
            }
        }

        library.books.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;

    fn input(title: &str, total: i32) -> BookInput {
        BookInput {
            title: title.to_string(),
            author: "Author".to_string(),
            isbn: "9780451524935".to_string(),
            publisher: None,
            genre: None,
            description: None,
            published_year: 1949,
            total_copies: total,
            maintenance: false,
        }
    }

    #[test]
    fn create_assigns_max_plus_one_and_full_availability() {
        let repo = Repository::in_memory();
        let first = repo.books.create(&input("A", 4)).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.available_copies, 4);
        assert_eq!(first.status(), crate::models::BookStatus::Available);

        let second = repo.books.create(&input("B", 1)).unwrap();
        assert_eq!(second.id, 2);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let repo = Repository::in_memory();
        repo.books.create(&input("A", 1)).unwrap();
        repo.books.create(&input("B", 1)).unwrap();
        repo.books.create(&input("C", 1)).unwrap();

        let titles: Vec<String> = repo.books.list().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn update_preserves_id_and_reflects_changes() {
        let repo = Repository::in_memory();
        let book = repo.books.create(&input("Old title", 2)).unwrap();

        let mut change = input("New title", 2);
        change.author = "New author".to_string();
        let updated = repo.books.update(book.id, &change).unwrap();

        assert_eq!(updated.id, book.id);
        assert_eq!(updated.title, "New title");

        let listed = repo.books.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "New title");
        assert_eq!(listed[0].author, "New author");
    }

    #[test]
    fn update_preserves_checked_out_copies() {
        let repo = Repository::in_memory();
        let book = repo.books.create(&input("A", 5)).unwrap();

        // simulate two checked-out copies
        {
            let mut library = repo.books.write();
            library.books[0].available_copies = 3;
        }

        let updated = repo.books.update(book.id, &input("A", 10)).unwrap();
        assert_eq!(updated.available_copies, 8);

        let shrunk = repo.books.update(book.id, &input("A", 2)).unwrap();
        assert_eq!(shrunk.available_copies, 0);
    }

    #[test]
    fn delete_missing_book_leaves_collection_unchanged() {
        let repo = Repository::in_memory();
        repo.books.create(&input("A", 1)).unwrap();

        let err = repo.books.delete(99, false).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(repo.books.list().len(), 1);
    }

    #[test]
    fn get_by_id_missing_is_not_found() {
        let repo = Repository::in_memory();
        assert!(matches!(repo.books.get_by_id(1), Err(AppError::NotFound(_))));
    }
}
