use super::{AppState, handlers};

use axum::{
    Router,
    routing::get,
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        // static segment, matched ahead of /users/{email}
        .route(
            "/users/in-birth-date-range",
            get(handlers::users_in_birth_date_range),
        )
        .route(
            "/users/{email}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .patch(handlers::patch_user)
                .delete(handlers::delete_user),
        )
        .with_state(state)
}
