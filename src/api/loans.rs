//! Lending workflow endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{ActiveLoan, BookResponse, BorrowRequest},
};

use super::AuthenticatedUser;

/// Borrow/return response: the updated book and a confirmation message
#[derive(Serialize, ToSchema)]
pub struct LoanResponse {
    pub book: BookResponse,
    pub message: String,
}

/// List all active loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active loans", body = Vec<ActiveLoan>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Json<Vec<ActiveLoan>> {
    Json(state.services.lending.list_loans())
}

/// Borrow a book for a member
#[utoipa::path(
    post,
    path = "/books/{id}/borrow",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Book borrowed", body = LoanResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Book or member not found"),
        (status = 409, description = "No copies available")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<(StatusCode, Json<LoanResponse>)> {
    let (book, message) = state.services.lending.borrow(id, request)?;

    Ok((
        StatusCode::CREATED,
        Json(LoanResponse {
            book: book.into(),
            message,
        }),
    ))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/books/{id}/return",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = LoanResponse),
        (status = 404, description = "Book not found"),
        (status = 409, description = "No active loan")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<LoanResponse>> {
    let (book, message) = state.services.lending.return_book(id)?;

    Ok(Json(LoanResponse {
        book: book.into(),
        message,
    }))
}
