use crate::auth::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use medley_core::models::MediaPost;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v0/posts/{id}",
    tag = "posts",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post found", body = MediaPost),
        (status = 401, description = "Missing user identity", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state),
    fields(
        user_id = %user_ctx.user_id,
        post_id = %id,
        operation = "get_post"
    )
)]
pub async fn get_post(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    user_ctx: UserContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let post = state.posts.get_post(id).await?;

    Ok(Json(post))
}

#[utoipa::path(
    get,
    path = "/api/v0/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts, most recent first", body = Vec<MediaPost>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_posts"))]
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let posts = state.posts.list_posts().await?;

    Ok(Json(posts))
}
