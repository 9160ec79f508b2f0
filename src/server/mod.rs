//! Server initialization and routing

use anyhow::{Context, Result};
use axum::{http::HeaderName, middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::api;
use crate::config::Config;
use crate::identity::{IdentityClient, IdentityDirectory};
use crate::middleware::{trusted_header_middleware, SanitizedMakeSpan, TrustedHeader};
use crate::state::AppState;

/// Run the HTTP server until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let directory =
        IdentityClient::new(config.identity.clone()).context("Failed to create identity client")?;
    info!("Identity directory: {}", directory.api_url());

    let http_addr = config.http_addr();
    let state = AppState::new(config, directory);
    let app = build_router(state)?;

    let listener = TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("Failed to bind {}", http_addr))?;
    info!("HTTP server started on {}", http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Build the HTTP router with the access guards applied
pub fn build_router<D>(state: AppState<D>) -> Result<Router>
where
    D: IdentityDirectory + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let guard = state.access_guard();

    let authenticated =
        guard.authenticated(Router::new().route("/api/v1/auth/me", get(api::me)));
    let admin = guard.admin(Router::new().route("/api/v1/admin/check", get(api::admin_check)));

    let mut router = Router::new()
        .route("/health", get(api::health))
        .merge(authenticated)
        .merge(admin);

    match &state.config().auth.trusted_header {
        Some(name) => {
            let header = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("Invalid AUTH_TRUSTED_HEADER: {}", name))?;
            info!("Reading authenticated user ID from header {}", header);
            router = router.layer(middleware::from_fn_with_state(
                TrustedHeader(header),
                trusted_header_middleware,
            ));
        }
        None => {
            warn!("AUTH_TRUSTED_HEADER not set, no upstream authentication layer is mounted");
        }
    }

    Ok(router
        .layer(TraceLayer::new_for_http().make_span_with(SanitizedMakeSpan))
        .layer(cors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdminConfig, AuthConfig, IdentityConfig, TelemetryConfig};
    use crate::identity::MockIdentityDirectory;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_config(trusted_header: Option<&str>) -> Config {
        Config {
            http_host: "127.0.0.1".to_string(),
            http_port: 0,
            admin: AdminConfig::new("admin@example.com"),
            identity: IdentityConfig {
                api_url: "http://localhost:9999".to_string(),
                secret_key: "sk_test".to_string(),
                timeout_secs: 5,
            },
            auth: AuthConfig {
                trusted_header: trusted_header.map(str::to_string),
            },
            telemetry: TelemetryConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let state = AppState::new(test_config(None), MockIdentityDirectory::new());
        let app = build_router(state).unwrap();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_me_requires_authentication_without_populator() {
        let state = AppState::new(test_config(None), MockIdentityDirectory::new());
        let app = build_router(state).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/auth/me")
                    .header("x-authenticated-user-id", "user_1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_me_with_trusted_header() {
        let state = AppState::new(
            test_config(Some("x-authenticated-user-id")),
            MockIdentityDirectory::new(),
        );
        let app = build_router(state).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/auth/me")
                    .header("x-authenticated-user-id", "user_1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["user_id"], "user_1");
    }

    #[test]
    fn test_invalid_trusted_header_rejected() {
        let state = AppState::new(test_config(Some("bad header")), MockIdentityDirectory::new());
        assert!(build_router(state).is_err());
    }
}
