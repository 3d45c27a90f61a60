//! REST error type and its JSON body.

use crate::user_actor::UserError;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    /// Local date-time the error was produced
    pub timestamp: NaiveDateTime,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// A store outcome: 404, 409, 403 for the domain kinds, 500 when the store is unreachable
    #[error(transparent)]
    User(#[from] UserError),

    /// Unreadable body or query, missing field, bad email shape (400)
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::User(UserError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::User(UserError::AlreadyExists(_)) => StatusCode::CONFLICT,
            ApiError::User(UserError::ValidationFailed(_)) => StatusCode::FORBIDDEN,
            ApiError::User(UserError::ActorCommunicationError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            status: status.as_u16(),
            message: self.to_string(),
            timestamp: Local::now().naive_local(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
