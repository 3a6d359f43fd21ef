use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use quill_core::{ApiResponse, FieldErrors};
use quill_store::StoreError;

#[derive(Debug)]
pub enum ApiError {
    /// Input rechazado, con detalle por campo
    Validation { errors: FieldErrors },

    /// Token ausente, invalido o expirado
    Unauthorized(String),

    /// Principal autenticado pero sin permiso sobre el recurso
    Forbidden(String),

    /// El recurso no existe
    NotFound(String),

    /// Error interno; el detalle se loggea, nunca se expone
    Internal(String),
}

impl ApiError {
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::PostNotFound(_) => Self::NotFound("Post not found".to_string()),
            StoreError::UserNotFound(_) => Self::NotFound("User not found".to_string()),
            StoreError::EmailTaken(_) => {
                let mut errors = FieldErrors::new();
                errors
                    .entry("email".to_string())
                    .or_default()
                    .push("The email has already been taken.".to_string());
                Self::Validation { errors }
            }
            StoreError::Unavailable { reason } => Self::Internal(reason),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiResponse::<()>::validation("Validation failed", errors),
            ),
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, ApiResponse::<()>::error(message))
            }
            ApiError::Forbidden(message) => {
                (StatusCode::FORBIDDEN, ApiResponse::<()>::error(message))
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, ApiResponse::<()>::error(message))
            }
            ApiError::Internal(detail) => {
                // El detalle va al log; la respuesta queda generica
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
    use quill_core::{PostId, UserId};

    #[test]
    fn store_not_found_maps_to_404() {
        let error: ApiError = StoreError::PostNotFound(PostId::new(1)).into();
        assert!(matches!(error, ApiError::NotFound(_)));

        let error: ApiError = StoreError::UserNotFound(UserId::new(1)).into();
        assert!(matches!(error, ApiError::NotFound(_)));
    }

    #[test]
    fn email_conflict_maps_to_field_errors() {
        let error: ApiError = StoreError::EmailTaken("a@b.com".into()).into();

        match error {
            ApiError::Validation { errors } => {
                assert_eq!(errors["email"][0], "The email has already been taken.");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn backend_failure_maps_to_internal() {
        let error: ApiError = StoreError::unavailable("db down").into();
        assert!(matches!(error, ApiError::Internal(_)));
    }
}
