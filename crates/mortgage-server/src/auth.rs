//! Bearer token authentication.
//!
//! Every request must carry `Authorization: Bearer <token>` with the token
//! configured at startup. The outcome is request-scoped: a successful check
//! puts an [`ApiPrincipal`] into the request extensions for handlers to read.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::handlers::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Body returned with `401 Unauthorized`.
pub const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing Bearer token";

/// The caller of an authenticated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiPrincipal {
    /// Name of the authenticated API user.
    pub subject: &'static str,
}

impl ApiPrincipal {
    /// The single user behind the shared API token.
    pub const API_USER: ApiPrincipal = ApiPrincipal { subject: "apiUser" };
}

/// Check an `Authorization` header value against the expected token.
pub fn authenticate(authorization: Option<&str>, expected_token: &str) -> Option<ApiPrincipal> {
    let token = authorization?.strip_prefix(BEARER_PREFIX)?;
    (token == expected_token).then_some(ApiPrincipal::API_USER)
}

/// Middleware rejecting requests without the configured bearer token.
pub async fn require_bearer_token(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match authenticate(authorization, &state.api_token) {
        Some(principal) => {
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        None => {
            warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "Rejected request with invalid or missing bearer token"
            );
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": UNAUTHORIZED_MESSAGE })),
            )
                .into_response()
        }
    }
}
