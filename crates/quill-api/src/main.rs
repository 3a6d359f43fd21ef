//! Quill API service binary.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use quill_api::auth::TokenService;
use quill_api::auth::token::DEFAULT_TOKEN_TTL_SECS;
use quill_api::{AppState, run_server};
use quill_cache::CacheConfig;
use quill_store::{MemoryBackend, PostStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get server configuration from environment
    let host = std::env::var("QUILL_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("QUILL_PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .context("QUILL_PORT must be a valid port number")?;

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Invalid address")?;

    // Token signing configuration
    let jwt_secret = std::env::var("QUILL_JWT_SECRET")
        .context("QUILL_JWT_SECRET environment variable is required")?;
    let token_ttl = match std::env::var("QUILL_TOKEN_TTL_SECS") {
        Ok(raw) => raw
            .parse::<i64>()
            .context("QUILL_TOKEN_TTL_SECS must be a number of seconds")?,
        Err(_) => DEFAULT_TOKEN_TTL_SECS,
    };

    // Cache configuration
    let mut cache_config = CacheConfig::default();
    if let Ok(raw) = std::env::var("QUILL_CACHE_TTL_SECS") {
        cache_config.ttl_seconds = raw
            .parse()
            .context("QUILL_CACHE_TTL_SECS must be a number of seconds")?;
    }

    tracing::info!("Starting Quill API v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Cache TTL: {}s", cache_config.ttl_seconds);
    tracing::info!("Token TTL: {}s", token_ttl);

    // Metrics must be installed before the first request lands
    let prometheus_handle = quill_api::metrics::init_metrics();
    quill_api::metrics::http::register_http_metrics();
    quill_cache::register_cache_metrics();

    // Wire the store and ping it before accepting traffic
    let backend = MemoryBackend::new();
    backend
        .health_check()
        .await
        .context("store backend failed its startup health check")?;
    tracing::info!("Store backend ready: {}", backend.name());

    let state = AppState::from_memory_backend(
        backend,
        &cache_config,
        TokenService::new(&jwt_secret, token_ttl),
    );

    run_server(addr, state, prometheus_handle).await?;

    Ok(())
}
