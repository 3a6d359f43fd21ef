use std::net::SocketAddr;

use axum::{
    Json, Router,
    routing::get,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use quill_core::ApiResponse;

use crate::handlers::{
    health::health_check,
    info::service_info,
    invalidate::{clear_post, clear_posts},
    metrics::metrics_handler,
    posts::{list_posts, show_post},
};
use crate::state::MirrorState;

/// Creates the mirror router without the metrics endpoint.
///
/// Integration tests drive this surface; the Prometheus recorder is
/// process-global and only the binary installs it.
pub fn create_router_with_state(state: MirrorState) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http());

    let app_router = Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        // Cached read routes + explicit clears
        .route("/cache/posts", get(list_posts).delete(clear_posts))
        .route("/cache/posts/{id}", get(show_post).delete(clear_post))
        .fallback(endpoint_not_found)
        .with_state(state);

    Router::new()
        .merge(app_router)
        .layer(CorsLayer::permissive())
        .layer(middleware_stack)
}

/// Creates the full router including the metrics endpoint.
pub fn create_router(state: MirrorState, prometheus_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    create_router_with_state(state).merge(metrics_router)
}

/// Uniform 404 for unknown endpoints.
async fn endpoint_not_found() -> (axum::http::StatusCode, Json<ApiResponse<()>>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        Json(ApiResponse::error("Endpoint not found")),
    )
}

/// Runs the server with the given state and metrics handle.
pub async fn run_server(
    addr: SocketAddr,
    state: MirrorState,
    prometheus_handle: PrometheusHandle,
) -> Result<(), std::io::Error> {
    let app = create_router(state, prometheus_handle);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Mirror listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
