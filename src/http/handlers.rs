//! User REST handlers.
//!
//! Each handler forwards to the [`UserClient`](crate::clients::UserClient) and lets
//! [`ApiError`] pick the status code. Body and query rejections are taken as `Result`s so they
//! surface as 400 with the standard error body instead of axum's plain-text defaults.

use super::{ApiError, ApiResult, AppState};
use crate::domain::{BirthDateRange, User, UserPatch, is_valid_email};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

fn check_email(email: &str) -> ApiResult<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ApiError::bad_request(format!("invalid email: {email}")))
    }
}

// =============================================================================
// Reads
// =============================================================================

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.users.find_all().await?))
}

/// GET /users/{email}
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.users.find_by_email(&email).await?))
}

/// GET /users/in-birth-date-range?dateFrom=YYYY-MM-DD&dateTo=YYYY-MM-DD
pub async fn users_in_birth_date_range(
    State(state): State<AppState>,
    query: Result<Query<BirthDateRange>, QueryRejection>,
) -> ApiResult<Json<Vec<User>>> {
    let Query(range) = query?;
    let users = state
        .users
        .find_in_birth_date_range(range.from, range.to)
        .await?;

    Ok(Json(users))
}

// =============================================================================
// Writes
// =============================================================================

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<User>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(user) = body?;
    check_email(&user.email)?;

    let created = state.users.save(user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /users/{email}
///
/// Replaces the whole record. The body may carry a different email, which re-keys the user.
pub async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    body: Result<Json<User>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(user) = body?;
    check_email(&user.email)?;

    Ok(Json(state.users.update(&email, user).await?))
}

/// PATCH /users/{email}
pub async fn patch_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(patch) = body?;
    // an empty email leaves the stored one untouched, so only a real value is checked
    if let Some(new_email) = patch.email.as_deref().filter(|e| !e.is_empty()) {
        check_email(new_email)?;
    }

    Ok(Json(state.users.patch(&email, patch).await?))
}

/// DELETE /users/{email}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<String> {
    state.users.delete_by_email(&email).await?;
    Ok(format!("User with email {email} was deleted"))
}
