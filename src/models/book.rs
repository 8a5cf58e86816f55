//! Book (catalog entry) model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validators::{validate_isbn_format, validate_published_year};

/// Book availability status.
///
/// Never stored: always derived from the copy counter, the active loan and
/// the maintenance flag (see [`Book::status`]), so the three can not diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Available,
    Borrowed,
    Maintenance,
}

/// Active loan recorded on a book. One loan per record: the original system
/// tracked a single borrower per title even with multiple copies, and that
/// model is kept here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanInfo {
    pub borrowed_by: i32,
    pub borrower_name: String,
    pub borrowed_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Book record owned by the catalog store
#[derive(Debug, Clone)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publisher: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub published_year: i32,
    pub total_copies: i32,
    pub available_copies: i32,
    pub maintenance: bool,
    pub loan: Option<LoanInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Derived availability status
    pub fn status(&self) -> BookStatus {
        if self.maintenance {
            BookStatus::Maintenance
        } else if self.loan.is_some() || self.available_copies == 0 {
            BookStatus::Borrowed
        } else {
            BookStatus::Available
        }
    }

    pub fn is_available(&self) -> bool {
        self.status() == BookStatus::Available && self.available_copies > 0
    }
}

/// Create/update book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(custom(function = validate_isbn_format))]
    pub isbn: String,
    pub publisher: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = validate_published_year))]
    pub published_year: i32,
    #[validate(range(min = 1, message = "At least one copy is required"))]
    pub total_copies: i32,
    #[serde(default)]
    pub maintenance: bool,
}

/// Book representation returned by the API: the stored record plus the
/// derived status and the loan fields flattened the way the original
/// records carried them.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub published_year: i32,
    pub total_copies: i32,
    pub available_copies: i32,
    pub status: BookStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrowed_by: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrower_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrowed_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            publisher: book.publisher.clone(),
            genre: book.genre.clone(),
            description: book.description.clone(),
            published_year: book.published_year,
            total_copies: book.total_copies,
            available_copies: book.available_copies,
            status: book.status(),
            borrowed_by: book.loan.as_ref().map(|l| l.borrowed_by),
            borrower_name: book.loan.as_ref().map(|l| l.borrower_name.clone()),
            borrowed_date: book.loan.as_ref().map(|l| l.borrowed_date),
            due_date: book.loan.as_ref().map(|l| l.due_date),
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self::from(&book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        let now = Utc::now();
        Book {
            id: 1,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            isbn: "9780451524935".to_string(),
            publisher: None,
            genre: None,
            description: None,
            published_year: 1949,
            total_copies: 4,
            available_copies: 4,
            maintenance: false,
            loan: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn status_derives_from_state() {
        let mut book = sample_book();
        assert_eq!(book.status(), BookStatus::Available);

        book.loan = Some(LoanInfo {
            borrowed_by: 7,
            borrower_name: "Alice".to_string(),
            borrowed_date: Utc::now().date_naive(),
            due_date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
        });
        assert_eq!(book.status(), BookStatus::Borrowed);

        book.loan = None;
        book.available_copies = 0;
        assert_eq!(book.status(), BookStatus::Borrowed);

        book.maintenance = true;
        assert_eq!(book.status(), BookStatus::Maintenance);
    }

    #[test]
    fn response_flattens_loan_fields() {
        let mut book = sample_book();
        book.loan = Some(LoanInfo {
            borrowed_by: 7,
            borrower_name: "Alice".to_string(),
            borrowed_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
        });
        book.available_copies = 3;

        let response = BookResponse::from(&book);
        assert_eq!(response.status, BookStatus::Borrowed);
        assert_eq!(response.borrowed_by, Some(7));
        assert_eq!(response.borrower_name.as_deref(), Some("Alice"));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "borrowed");
        assert_eq!(json["availableCopies"], 3);
        assert_eq!(json["publishedYear"], 1949);
        assert_eq!(json["dueDate"], "2099-01-01");
    }

    #[test]
    fn input_validation_rejects_bad_fields() {
        let input = BookInput {
            title: String::new(),
            author: "A".to_string(),
            isbn: "123".to_string(),
            publisher: None,
            genre: None,
            description: None,
            published_year: 999,
            total_copies: 0,
            maintenance: false,
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("isbn"));
        assert!(fields.contains_key("published_year"));
        assert!(fields.contains_key("total_copies"));
    }
}
