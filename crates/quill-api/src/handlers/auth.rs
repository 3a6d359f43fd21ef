//! Authentication endpoint handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use quill_core::validation::Validator;
use quill_core::{ApiResponse, FieldErrors, UserPublic, Validate};
use quill_store::NewUser;

use crate::auth::{AuthUser, password};
use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::state::AppState;

/// Maximum accepted name length, matching the title bound.
const NAME_MAX_LEN: usize = 255;

/// Minimum accepted password length.
const PASSWORD_MIN_LEN: usize = 6;

/// Request body para POST /register.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.required("name", &self.name);
        v.max_length("name", &self.name, NAME_MAX_LEN);
        v.required("email", &self.email);
        v.email("email", &self.email);
        v.required("password", &self.password);
        v.min_length("password", &self.password, PASSWORD_MIN_LEN);
        v.finish()
    }
}

/// Request body para POST /login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.required("email", &self.email);
        v.email("email", &self.email);
        v.required("password", &self.password);
        v.finish()
    }
}

/// Respuesta de los endpoints que emiten un token.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: UserPublic,
    pub token: String,
}

/// POST /register
#[instrument(skip_all, fields(email = %body.email))]
pub async fn register(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<RegisterRequest>,
) -> Result<Response, ApiError> {
    let password_hash = password::hash_password(&body.password)
        .map_err(|error| ApiError::internal(format!("password hashing failed: {error}")))?;

    let user = state
        .users()
        .create_user(NewUser::new(body.name, body.email, password_hash))
        .await?;

    let token = state
        .auth()
        .issue(user.id)
        .map_err(|error| ApiError::internal(format!("token issuance failed: {error}")))?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: "User registered successfully".to_string(),
            user,
            token,
        }),
    )
        .into_response())
}

/// POST /login
#[instrument(skip_all, fields(email = %body.email))]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<LoginRequest>,
) -> Result<Response, ApiError> {
    let credentials = state.users().find_by_email(&body.email).await?;

    // Mismo mensaje para email desconocido y password incorrecto
    let Some(credentials) = credentials else {
        return Err(ApiError::unauthorized("Invalid credentials"));
    };

    if !password::verify_password(&body.password, &credentials.password_hash) {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = state
        .auth()
        .issue(credentials.user.id)
        .map_err(|error| ApiError::internal(format!("token issuance failed: {error}")))?;

    tracing::info!(user_id = %credentials.user.id, "Login successful");

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            success: true,
            message: "Login successful".to_string(),
            user: credentials.user,
            token,
        }),
    )
        .into_response())
}

/// GET /me
#[instrument(skip_all)]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Response, ApiError> {
    let user = state.users().get_user(user_id).await?;

    Ok(Json(ApiResponse::ok("User retrieved successfully", user)).into_response())
}

/// POST /logout
///
/// Tokens are stateless; logout acknowledges and leaves expiry to the
/// token TTL. Clients drop the token.
#[instrument(skip_all)]
pub async fn logout(AuthUser(user_id): AuthUser) -> Json<ApiResponse<()>> {
    tracing::info!(user_id = %user_id, "Logout");

    Json(ApiResponse::message_only("Successfully logged out"))
}
