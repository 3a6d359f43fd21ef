//! Cached read endpoints.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use quill_cache::CacheKey;
use quill_core::{ApiResponse, PostId};

use crate::error::MirrorError;
use crate::state::MirrorState;

/// GET /cache/posts
#[instrument(skip_all)]
pub async fn list_posts(State(state): State<MirrorState>) -> Result<Response, MirrorError> {
    let store = state.posts();

    let listing = state
        .reader()
        .get_with(&CacheKey::AllPosts, || async move { store.get_all().await })
        .await?;

    let message = if listing.hit {
        "Posts retrieved from cache"
    } else {
        "Posts retrieved from database and cached"
    };

    Ok(Json(ApiResponse::read(message, listing.value, listing.hit)).into_response())
}

/// GET /cache/posts/{id}
#[instrument(skip_all, fields(post_id = %id))]
pub async fn show_post(
    State(state): State<MirrorState>,
    Path(id): Path<i64>,
) -> Result<Response, MirrorError> {
    let id = PostId::new(id);
    let store = state.posts();

    let post = state
        .reader()
        .get_with(&CacheKey::Post(id), || async move { store.get(id).await })
        .await?;

    let message = if post.hit {
        "Post retrieved from cache"
    } else {
        "Post retrieved from database and cached"
    };

    Ok(Json(ApiResponse::read(message, post.value, post.hit)).into_response())
}
