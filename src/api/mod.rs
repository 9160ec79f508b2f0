//! REST API handlers

use axum::Json;
use serde::Serialize;

use crate::middleware::AuthContext;

/// Liveness probe
pub async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: String,
}

/// Echo the authenticated user ID. Mounted behind the authentication guard.
pub async fn me(auth: AuthContext) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: auth.user_id().unwrap_or_default().to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct AdminCheckResponse {
    pub admin: bool,
}

/// Reached only when the admin guard let the request through.
pub async fn admin_check() -> Json<AdminCheckResponse> {
    Json(AdminCheckResponse { admin: true })
}
