//! Posts endpoint handlers.
//!
//! Reads go through the cache-aside reader; writes hit the store and
//! drop the affected cache keys before answering.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use quill_cache::{CacheKey, write_invalidation};
use quill_core::post::TITLE_MAX_LEN;
use quill_core::validation::Validator;
use quill_core::{ApiResponse, FieldErrors, PostId, Validate};
use quill_store::{NewPost, PostUpdate};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::state::AppState;

/// Request body para POST /posts.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Validate for CreatePostRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.required("title", &self.title);
        v.max_length("title", &self.title, TITLE_MAX_LEN);
        v.required("content", &self.content);
        v.finish()
    }
}

/// Request body para PUT /posts/{id}. Absent fields are left alone;
/// present fields must pass the create rules.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Validate for UpdatePostRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        if let Some(title) = &self.title {
            v.required("title", title);
            v.max_length("title", title, TITLE_MAX_LEN);
        }
        if let Some(content) = &self.content {
            v.required("content", content);
        }
        v.finish()
    }
}

/// GET /posts
#[instrument(skip_all)]
pub async fn list_posts(State(state): State<AppState>) -> Result<Response, ApiError> {
    let store = state.posts();

    let listing = state
        .reader()
        .get_with(&CacheKey::AllPosts, || async move { store.get_all().await })
        .await?;

    let message = if listing.hit {
        "Posts retrieved from cache"
    } else {
        "Posts retrieved successfully"
    };

    Ok(Json(ApiResponse::read(message, listing.value, listing.hit)).into_response())
}

/// GET /posts/{id}
#[instrument(skip_all, fields(post_id = %id))]
pub async fn show_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let id = PostId::new(id);
    let store = state.posts();

    // Un loader fallido (post inexistente) se propaga sin poblar cache
    let post = state
        .reader()
        .get_with(&CacheKey::Post(id), || async move { store.get(id).await })
        .await?;

    let message = if post.hit {
        "Post retrieved from cache"
    } else {
        "Post retrieved successfully"
    };

    Ok(Json(ApiResponse::read(message, post.value, post.hit)).into_response())
}

/// POST /posts
#[instrument(skip_all, fields(user_id = %user_id))]
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidJson(body): ValidJson<CreatePostRequest>,
) -> Result<Response, ApiError> {
    let post = state
        .posts()
        .create(NewPost::new(body.title, body.content, user_id))
        .await?;

    // No entity entry can exist yet; only the listing goes
    state
        .reader()
        .invalidate_many(&write_invalidation(None))
        .await;

    tracing::info!(post_id = %post.id, "Post created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Post created successfully", post)),
    )
        .into_response())
}

/// PUT /posts/{id}
#[instrument(skip_all, fields(post_id = %id, user_id = %user_id))]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AuthUser(user_id): AuthUser,
    ValidJson(body): ValidJson<UpdatePostRequest>,
) -> Result<Response, ApiError> {
    let id = PostId::new(id);
    let store = state.posts();

    // 404 para posts inexistentes, 403 para posts ajenos
    if !store.is_owned_by(id, user_id).await? {
        return Err(ApiError::forbidden("Unauthorized to update this post"));
    }

    let post = store
        .update(
            id,
            PostUpdate {
                title: body.title,
                content: body.content,
            },
        )
        .await?;

    state
        .reader()
        .invalidate_many(&write_invalidation(Some(id)))
        .await;

    tracing::info!(post_id = %id, "Post updated");

    Ok(Json(ApiResponse::ok("Post updated successfully", post)).into_response())
}

/// DELETE /posts/{id}
#[instrument(skip_all, fields(post_id = %id, user_id = %user_id))]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AuthUser(user_id): AuthUser,
) -> Result<Response, ApiError> {
    let id = PostId::new(id);
    let store = state.posts();

    if !store.is_owned_by(id, user_id).await? {
        return Err(ApiError::forbidden("Unauthorized to delete this post"));
    }

    store.delete(id).await?;

    state
        .reader()
        .invalidate_many(&write_invalidation(Some(id)))
        .await;

    tracing::info!(post_id = %id, "Post deleted");

    Ok(Json(ApiResponse::<()>::message_only("Post deleted successfully")).into_response())
}
