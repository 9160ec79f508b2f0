//! Authentication enforcement middleware
//!
//! Rejects requests that the upstream authentication layer did not attach a
//! user ID to. The guard only inspects `AuthContext`; it never verifies
//! tokens itself.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::auth::AuthContext;

pub(crate) const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Authentication enforcement middleware
///
/// Requests without an authenticated user ID get 401 and never reach the
/// next stage. Authenticated requests pass through untouched.
pub async fn require_auth_middleware(request: Request<Body>, next: Next) -> Response {
    if AuthContext::user_id_of(&request).is_none() {
        return unauthorized_response();
    }

    next.run(request).await
}

/// Generate the fixed 401 Unauthorized response
pub(crate) fn unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": UNAUTHORIZED_MESSAGE })),
    )
        .into_response()
}
