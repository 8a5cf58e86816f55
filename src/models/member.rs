//! Member (library patron) model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validators::{validate_email_format, validate_phone_format};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MembershipType {
    Standard,
    Premium,
}

impl Default for MembershipType {
    fn default() -> Self {
        MembershipType::Standard
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl Default for MemberStatus {
    fn default() -> Self {
        MemberStatus::Active
    }
}

/// Member record owned by the membership store
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub membership_date: NaiveDate,
    pub membership_type: MembershipType,
    pub status: MemberStatus,
    /// Count of books currently borrowed by this member. Maintained by the
    /// lending workflow together with the book loan fields.
    pub borrowed_books: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update member request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = validate_email_format))]
    pub email: String,
    #[validate(custom(function = validate_phone_format))]
    pub phone: String,
    /// Defaults to the creation date
    pub membership_date: Option<NaiveDate>,
    pub membership_type: Option<MembershipType>,
    pub status: Option<MemberStatus>,
}
