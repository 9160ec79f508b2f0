use access_guard::{config::Config, server, telemetry};
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    telemetry::init(&config.telemetry);

    info!("Starting Access Guard");
    info!("HTTP server listening on {}", config.http_addr());

    server::run(config).await
}
