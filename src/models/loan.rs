//! Loan (borrow) request/response types

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// True iff the due date is strictly before today
pub fn is_overdue(due_date: NaiveDate) -> bool {
    due_date < Utc::now().date_naive()
}

/// Borrow request for a book
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    /// Borrowing member ID
    pub member_id: i32,
    /// Borrower display name recorded on the loan
    #[validate(length(min = 1, message = "Member name is required"))]
    pub member_name: String,
    /// Expected return date
    pub due_date: NaiveDate,
}

/// Active loan projection for the "currently borrowed" listing
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActiveLoan {
    pub book_id: i32,
    pub title: String,
    pub borrowed_by: i32,
    pub borrower_name: String,
    pub borrowed_date: NaiveDate,
    pub due_date: NaiveDate,
    pub is_overdue: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn past_due_date_is_overdue() {
        assert!(is_overdue(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()));
    }

    #[test]
    fn today_and_tomorrow_are_not_overdue() {
        let today = Utc::now().date_naive();
        assert!(!is_overdue(today));
        assert!(!is_overdue(today + Duration::days(1)));
    }
}
