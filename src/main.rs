use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use linkhash::config::Config;
use linkhash::create_app;
use linkhash::storage::open_store;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration");

    // Initialize storage
    let store = open_store(&config.store)
        .await
        .context("failed to open mapping store")?;
    info!("Mapping store initialized successfully");

    if config.base_url.is_empty() {
        info!("BASE_URL is empty; short URLs will be relative paths");
    } else {
        info!("Short URLs will use base {}", config.base_url);
    }
    info!(
        "Short ids: {} hex characters of {}",
        config.short_id.length, config.short_id.algorithm
    );

    let app = create_app(store, &config)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("🚀 Server listening on http://{}", addr);
    info!("   - POST http://{}/shorten", addr);
    info!("   - GET  http://{}/{{shortId}}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
