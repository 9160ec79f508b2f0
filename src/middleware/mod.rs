//! HTTP middleware for Access Guard
//!
//! This module provides middleware components for the REST API:
//! - Request authentication context and the trusted-header populator
//! - Authentication enforcement (401) and admin enforcement (403)
//! - `AccessGuard` to apply both in the right order
//! - Sanitized request spans for `TraceLayer`

pub mod auth;
pub mod guard;
pub mod require_admin;
pub mod require_auth;
pub mod trace;

pub use auth::{trusted_header_middleware, AuthContext, TrustedHeader};
pub use guard::AccessGuard;
pub use require_admin::{is_admin, require_admin_middleware, AdminGuardState};
pub use require_auth::require_auth_middleware;
pub use trace::SanitizedMakeSpan;
