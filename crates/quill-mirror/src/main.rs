//! Quill mirror service binary.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use quill_cache::CacheConfig;
use quill_mirror::{MirrorState, run_server};
use quill_store::{MemoryBackend, PostStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get server configuration from environment
    let host = std::env::var("QUILL_MIRROR_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("QUILL_MIRROR_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .context("QUILL_MIRROR_PORT must be a valid port number")?;

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Invalid address")?;

    // Cache configuration
    let mut cache_config = CacheConfig::default();
    if let Ok(raw) = std::env::var("QUILL_CACHE_TTL_SECS") {
        cache_config.ttl_seconds = raw
            .parse()
            .context("QUILL_CACHE_TTL_SECS must be a number of seconds")?;
    }

    tracing::info!("Starting Quill mirror v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Cache TTL: {}s", cache_config.ttl_seconds);

    // Metrics must be installed before the first request lands
    let prometheus_handle = init_metrics();
    quill_cache::register_cache_metrics();

    // Wire the store and ping it before accepting traffic
    let backend = MemoryBackend::new();
    backend
        .health_check()
        .await
        .context("store backend failed its startup health check")?;
    tracing::info!("Store backend ready: {}", backend.name());

    // The mirror has no write surface; optionally load demo data
    let seed = std::env::var("QUILL_MIRROR_SEED")
        .map(|raw| raw == "1" || raw.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if seed {
        backend.seed_demo();
    }

    let state = MirrorState::from_memory_backend(backend, &cache_config);

    run_server(addr, state, prometheus_handle).await?;

    Ok(())
}

/// Inicializa el recorder Prometheus con los buckets por defecto.
fn init_metrics() -> metrics_exporter_prometheus::PrometheusHandle {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install metrics recorder")
}
