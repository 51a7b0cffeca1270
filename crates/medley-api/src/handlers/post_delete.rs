use crate::auth::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/v0/posts/{id}",
    tag = "posts",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Post deleted (or was already gone)"),
        (status = 401, description = "Missing user identity", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state),
    fields(user_id = %user_ctx.user_id, post_id = %id, operation = "delete_post")
)]
pub async fn delete_post(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    user_ctx: UserContext,
) -> Result<impl IntoResponse, HttpAppError> {
    // Idempotent: an unknown id still answers 204.
    state.posts.delete_post(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
