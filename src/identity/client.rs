//! Identity directory Backend API client
//!
//! Talks to a Clerk-compatible Backend API: users are fetched with
//! `GET {api_url}/v1/users/{user_id}` and authenticated with the instance
//! secret key as a Bearer token.

use crate::config::IdentityConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::types::{DirectoryUser, UserProfile};
use super::IdentityDirectory;

/// Identity directory HTTP client
#[derive(Clone)]
pub struct IdentityClient {
    config: IdentityConfig,
    http_client: Client,
}

impl IdentityClient {
    /// Create a new directory client
    pub fn new(config: IdentityConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Identity(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Get the Backend API base URL
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    fn user_url(&self, user_id: &str) -> String {
        format!(
            "{}/v1/users/{}",
            self.config.api_url.trim_end_matches('/'),
            urlencoding::encode(user_id)
        )
    }

    /// Get a user by ID
    pub async fn get_user(&self, user_id: &str) -> Result<DirectoryUser> {
        let response = self
            .http_client
            .get(self.user_url(user_id))
            .bearer_auth(&self.config.secret_key)
            .send()
            .await
            .map_err(|e| AppError::Identity(format!("Failed to get user: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(
                "User not found in identity directory".to_string(),
            ));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Identity(format!(
                "Failed to get user: {} - {}",
                status, body
            )));
        }

        let user: DirectoryUser = response
            .json()
            .await
            .map_err(|e| AppError::Identity(format!("Failed to parse user: {}", e)))?;

        Ok(user)
    }
}

#[async_trait]
impl IdentityDirectory for IdentityClient {
    async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.get_user(user_id).await.map(UserProfile::from)
    }
}
