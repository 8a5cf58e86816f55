//! Catalog management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{Book, BookInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Full catalog in insertion order
    pub fn list_books(&self) -> Vec<Book> {
        self.repository.books.list()
    }

    /// Get book by ID
    pub fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id)
    }

    /// Create a new book after validating the input
    pub fn create_book(&self, input: BookInput) -> AppResult<Book> {
        input.validate()?;
        let created = self.repository.books.create(&input)?;
        tracing::info!("Catalog: created book id={} \"{}\"", created.id, created.title);
        Ok(created)
    }

    /// Update an existing book after validating the input
    pub fn update_book(&self, id: i32, input: BookInput) -> AppResult<Book> {
        input.validate()?;
        self.repository.books.update(id, &input)
    }

    /// Delete a book; `force` cascade-clears an active loan
    pub fn delete_book(&self, id: i32, force: bool) -> AppResult<()> {
        self.repository.books.delete(id, force)?;
        tracing::info!("Catalog: deleted book id={} (force={})", id, force);
        Ok(())
    }
}
