//! Access Guard - authentication and admin guards for axum services
//!
//! This crate provides the two request guards (authenticated user, admin user),
//! the identity directory client the admin guard consults, and a small host
//! service that wires them into a router.

pub mod api;
pub mod config;
pub mod error;
pub mod identity;
pub mod middleware;
pub mod server;
pub mod state;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
