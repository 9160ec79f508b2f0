//! Request authentication context
//!
//! Provides:
//! - `AuthContext`, the per-request identity record populated upstream
//! - `trusted_header_middleware` for deployments behind an authenticating gateway

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{request::Parts, HeaderName, Request},
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;

/// Authentication state attached to a request by the upstream auth layer.
///
/// Lives in the request extensions. A request without this extension is
/// anonymous, exactly like one carrying `user_id: None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Option<String>,
}

impl AuthContext {
    pub fn authenticated(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The authenticated user ID, if any. Empty IDs count as absent.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Read the authenticated user ID off a request without modifying it.
    pub fn user_id_of<B>(request: &Request<B>) -> Option<&str> {
        request
            .extensions()
            .get::<AuthContext>()
            .and_then(AuthContext::user_id)
    }
}

/// Handlers can take `AuthContext` directly; anonymous requests yield the default.
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .unwrap_or_default())
    }
}

/// Name of the header a fronting gateway uses to pass the verified user ID
#[derive(Debug, Clone)]
pub struct TrustedHeader(pub HeaderName);

/// Populate `AuthContext` from a gateway-supplied header.
///
/// No token verification happens here. Only mount this when every request is
/// guaranteed to pass through a gateway that strips client-supplied copies of
/// the header.
pub async fn trusted_header_middleware(
    State(TrustedHeader(header)): State<TrustedHeader>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let user_id = request
        .headers()
        .get(&header)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    if let Some(user_id) = user_id {
        request
            .extensions_mut()
            .insert(AuthContext::authenticated(user_id));
    }

    next.run(request).await
}
