use std::net::SocketAddr;

use axum::{
    Json, Router, middleware,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use quill_core::ApiResponse;

use crate::handlers::{
    auth::{login, logout, me, register},
    health::health_check,
    metrics::metrics_handler,
    posts::{create_post, delete_post, list_posts, show_post, update_post},
};
use crate::middleware::{LoggingLayer, RequestIdLayer};
use crate::state::AppState;

/// Creates the application router without the metrics endpoint.
///
/// This is the surface integration tests drive: everything except the
/// Prometheus recorder, which is process-global and therefore wired
/// only by the binary.
pub fn create_router_with_state(state: AppState) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(RequestIdLayer)
        .layer(LoggingLayer);

    let app_router = Router::new()
        .route("/health", get(health_check))
        // Auth routes
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/logout", post(logout))
        // Posts routes
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(show_post).put(update_post).delete(delete_post),
        )
        .fallback(endpoint_not_found)
        .with_state(state);

    Router::new()
        .merge(app_router)
        // HTTP metrics middleware
        .layer(middleware::from_fn(
            crate::metrics::http::http_metrics_middleware,
        ))
        // The web client calls this API from another origin
        .layer(CorsLayer::permissive())
        .layer(middleware_stack)
}

/// Creates the full router including the metrics endpoint.
pub fn create_router(state: AppState, prometheus_handle: PrometheusHandle) -> Router {
    // Router for metrics endpoint (different state)
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
    state: AppState,
    prometheus_handle: PrometheusHandle,
) -> Result<(), std::io::Error> {
    let app = create_router(state, prometheus_handle);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

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
