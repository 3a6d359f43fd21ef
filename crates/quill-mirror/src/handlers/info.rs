//! Service info document.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointList,
}

#[derive(Debug, Serialize)]
pub struct EndpointList {
    pub health: String,
    pub posts: String,
    pub single_post: String,
}

/// GET /
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Quill cache mirror service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointList {
            health: "/health".to_string(),
            posts: "/cache/posts".to_string(),
            single_post: "/cache/posts/{id}".to_string(),
        },
    })
}
