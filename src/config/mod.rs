//! Configuration management for Access Guard

use anyhow::{Context, Result};
use std::env;
use std::fmt;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server host
    pub http_host: String,
    /// HTTP server port
    pub http_port: u16,
    /// Admin authorization configuration
    pub admin: AdminConfig,
    /// Identity directory configuration
    pub identity: IdentityConfig,
    /// Upstream authentication configuration
    pub auth: AuthConfig,
    /// Logging configuration
    pub telemetry: TelemetryConfig,
}

/// Admin authorization configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// The single email address that is granted admin access.
    /// Compared verbatim against the user's primary email.
    pub admin_email: String,
}

impl AdminConfig {
    pub fn new(admin_email: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
        }
    }
}

#[derive(Clone)]
pub struct IdentityConfig {
    /// Base URL of the identity directory Backend API (e.g., https://api.clerk.com)
    pub api_url: String,
    /// Secret key sent as a Bearer token on every directory call
    pub secret_key: String,
    /// HTTP timeout applied to directory calls
    pub timeout_secs: u64,
}

impl fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("api_url", &self.api_url)
            .field("secret_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Header set by an authenticating gateway that carries the verified user ID.
    /// When unset, no populator is mounted and the host must install its own.
    pub trusted_header: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// "json" for structured logs, anything else for human-readable output
    pub log_format: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            http_host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid HTTP_PORT")?,
            admin: AdminConfig {
                admin_email: env::var("ADMIN_EMAIL").context("ADMIN_EMAIL is required")?,
            },
            identity: IdentityConfig {
                api_url: env::var("IDENTITY_API_URL")
                    .unwrap_or_else(|_| "https://api.clerk.com".to_string()),
                secret_key: env::var("IDENTITY_SECRET_KEY")
                    .or_else(|_| env::var("CLERK_SECRET_KEY"))
                    .context("IDENTITY_SECRET_KEY is required")?,
                timeout_secs: env::var("IDENTITY_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("Invalid IDENTITY_TIMEOUT_SECS")?,
            },
            auth: AuthConfig {
                trusted_header: env::var("AUTH_TRUSTED_HEADER")
                    .ok()
                    .map(|h| h.trim().to_ascii_lowercase())
                    .filter(|h| !h.is_empty()),
            },
            telemetry: TelemetryConfig {
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
        })
    }

    /// Get HTTP server address
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
