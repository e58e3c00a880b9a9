//! Route definitions.

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::auth;
use crate::handlers::{self, AppState};

/// Create the API router.
///
/// Every route, including unknown paths, sits behind bearer authentication.
///
/// # Arguments
/// * `state` - Shared handler state
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/interest-rates", get(handlers::list_interest_rates))
        .route("/api/mortgage-check", post(handlers::check_mortgage))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer_token,
        ))
        .with_state(state)
}
