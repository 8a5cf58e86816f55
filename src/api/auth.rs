//! Authentication endpoints (mock credentials, real session plumbing)

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{LoginRequest, LoginResponse, SessionUser},
};

use super::AuthenticatedUser;

/// Log in with email and password.
///
/// Credentials are accepted unconditionally as long as both fields are
/// non-empty; the returned token authenticates all other endpoints.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 400, description = "Missing email or password")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = state.services.auth.login(request)?;
    Ok(Json(response))
}

/// Log out and clear the persisted session
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Session closed"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn logout(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> AppResult<StatusCode> {
    state.services.auth.logout()?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the current session identity
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current identity", body = SessionUser),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(AuthenticatedUser(user): AuthenticatedUser) -> Json<SessionUser> {
    Json(user)
}
