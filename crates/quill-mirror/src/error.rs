use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use quill_core::ApiResponse;
use quill_store::StoreError;

#[derive(Debug)]
pub enum MirrorError {
    /// El recurso no existe
    NotFound(String),

    /// Error interno; el detalle se loggea, nunca se expone
    Internal(String),
}

impl From<StoreError> for MirrorError {
    fn from(error: StoreError) -> Self {
        if error.is_not_found() {
            Self::NotFound("Post not found".to_string())
        } else {
            Self::Internal(error.to_string())
        }
    }
}

impl IntoResponse for MirrorError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            MirrorError::NotFound(message) => {
                (StatusCode::NOT_FOUND, ApiResponse::<()>::error(message))
            }
            MirrorError::Internal(detail) => {
                tracing::error!(%detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::error("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::PostId;

    #[test]
    fn store_not_found_maps_to_404() {
        let error: MirrorError = StoreError::PostNotFound(PostId::new(1)).into();
        assert!(matches!(error, MirrorError::NotFound(_)));
    }

    #[test]
    fn backend_failure_maps_to_internal() {
        let error: MirrorError = StoreError::unavailable("db down").into();
        assert!(matches!(error, MirrorError::Internal(_)));
    }
}
