//! Admin enforcement middleware
//!
//! Looks up the authenticated user's profile in the identity directory and
//! lets the request through only when the primary email is exactly the
//! configured admin email.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use super::auth::AuthContext;
use super::require_auth::unauthorized_response;
use crate::config::AdminConfig;
use crate::error::Result;
use crate::identity::{IdentityDirectory, UserProfile};

pub(crate) const FORBIDDEN_MESSAGE: &str = "Unauthorized- You must be an Admin";

/// Shared state for the admin middleware
pub struct AdminGuardState<D> {
    directory: Arc<D>,
    config: AdminConfig,
}

impl<D> AdminGuardState<D> {
    pub fn new(directory: Arc<D>, config: AdminConfig) -> Self {
        Self { directory, config }
    }

    pub fn admin_config(&self) -> &AdminConfig {
        &self.config
    }
}

impl<D> Clone for AdminGuardState<D> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            config: self.config.clone(),
        }
    }
}

/// Exact, case-sensitive comparison of the primary email against the admin email.
/// A profile without a primary email is never an admin.
pub fn is_admin(profile: &UserProfile, config: &AdminConfig) -> bool {
    profile.primary_email.as_deref() == Some(config.admin_email.as_str())
}

/// Admin enforcement middleware
///
/// - No authenticated user ID: 401, same as `require_auth_middleware`, and the
///   directory is not called.
/// - Directory lookup fails: the error is returned unchanged so `AppError`'s
///   response mapping handles it. Nothing else is sent.
/// - Primary email is not the admin email: 403.
pub async fn require_admin_middleware<D>(
    State(state): State<AdminGuardState<D>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response>
where
    D: IdentityDirectory + 'static,
{
    let user_id = match AuthContext::user_id_of(&request) {
        Some(id) => id.to_string(),
        None => return Ok(unauthorized_response()),
    };

    let profile = state.directory.get_user_profile(&user_id).await?;

    tracing::debug!(
        user_id = %user_id,
        email = profile.primary_email.as_deref().unwrap_or("<none>"),
        "Resolved primary email for admin check"
    );

    if !is_admin(&profile, &state.config) {
        return Ok(forbidden_response());
    }

    Ok(next.run(request).await)
}

/// Generate the fixed 403 Forbidden response
fn forbidden_response() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "message": FORBIDDEN_MESSAGE })),
    )
        .into_response()
}
