//! Identity directory integration
//!
//! The access guards only need one thing from the directory: a user's profile,
//! looked up by the identifier the upstream authentication layer resolved.
//! `IdentityDirectory` is the seam; `IdentityClient` is the HTTP implementation.

pub mod client;
pub mod types;

pub use client::IdentityClient;
pub use types::{DirectoryEmailAddress, DirectoryUser, UserProfile};

use crate::error::Result;
use async_trait::async_trait;

/// Read-only user profile lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Fetch the profile of `user_id`. Not cached; every call hits the directory.
    async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile>;
}
