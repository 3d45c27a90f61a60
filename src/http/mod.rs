//! # HTTP Layer
//!
//! REST surface over the User store, built on `axum`.
//!
//! | Route | Method | Success |
//! |---|---|---|
//! | `/users` | GET | 200, all users |
//! | `/users` | POST | 201, the created user |
//! | `/users/in-birth-date-range?dateFrom&dateTo` | GET | 200, users born strictly between |
//! | `/users/{email}` | GET | 200 |
//! | `/users/{email}` | PUT | 200, the stored replacement |
//! | `/users/{email}` | PATCH | 200, the merged user |
//! | `/users/{email}` | DELETE | 200, confirmation text |
//!
//! Failures use [`ErrorResponse`]; see [`ApiError::status`] for the mapping.

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::build_router;

use crate::clients::UserClient;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
}

impl AppState {
    pub fn new(users: UserClient) -> Self {
        Self { users }
    }
}
