//! Guard composition
//!
//! `AccessGuard` applies the authentication and admin middleware to a router
//! in a fixed order, so an admin-protected route always runs the
//! authentication check first.

use axum::{middleware, Router};
use std::sync::Arc;

use super::require_admin::{require_admin_middleware, AdminGuardState};
use super::require_auth::require_auth_middleware;
use crate::config::AdminConfig;
use crate::identity::IdentityDirectory;

/// Builder that protects routers with the access guards
pub struct AccessGuard<D> {
    admin_state: AdminGuardState<D>,
}

impl<D> Clone for AccessGuard<D> {
    fn clone(&self) -> Self {
        Self {
            admin_state: self.admin_state.clone(),
        }
    }
}

impl<D> AccessGuard<D>
where
    D: IdentityDirectory + 'static,
{
    pub fn new(directory: Arc<D>, config: AdminConfig) -> Self {
        Self {
            admin_state: AdminGuardState::new(directory, config),
        }
    }

    /// Require an authenticated user on every route of `router`.
    pub fn authenticated<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.route_layer(middleware::from_fn(require_auth_middleware))
    }

    /// Require an authenticated admin on every route of `router`.
    pub fn admin<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        // Layers added later wrap earlier ones, so authentication runs first.
        router
            .route_layer(middleware::from_fn_with_state(
                self.admin_state.clone(),
                require_admin_middleware::<D>,
            ))
            .route_layer(middleware::from_fn(require_auth_middleware))
    }
}
