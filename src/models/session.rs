//! Session (authenticated identity) model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Identity attached to an authenticated session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Login request. Credentials are accepted unconditionally as long as both
/// fields are non-empty (mock authentication).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: SessionUser,
    pub token: String,
    pub token_type: String,
}
