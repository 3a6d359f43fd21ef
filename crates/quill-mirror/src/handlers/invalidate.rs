//! Cache invalidation endpoint handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use quill_cache::CacheKey;
use quill_core::{ApiResponse, PostId};

use crate::state::MirrorState;

/// DELETE /cache/posts
/// Limpia la entry de la coleccion.
#[instrument(skip_all)]
pub async fn clear_posts(State(state): State<MirrorState>) -> Json<ApiResponse<()>> {
    state.reader().invalidate(&CacheKey::AllPosts).await;

    tracing::info!("Posts cache cleared");

    Json(ApiResponse::message_only("Posts cache cleared successfully"))
}

/// DELETE /cache/posts/{id}
/// Limpia la entry de un post especifico.
#[instrument(skip_all, fields(post_id = %id))]
pub async fn clear_post(
    State(state): State<MirrorState>,
    Path(id): Path<i64>,
) -> Json<ApiResponse<()>> {
    let id = PostId::new(id);

    state.reader().invalidate(&CacheKey::Post(id)).await;

    tracing::info!(post_id = %id, "Post cache cleared");

    Json(ApiResponse::message_only(format!(
        "Post {id} cache cleared successfully"
    )))
}
