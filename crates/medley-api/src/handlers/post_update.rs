use crate::auth::UserContext;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use medley_core::models::MediaPost;
use medley_services::EditPostInput;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Absent fields stay unchanged. Every successful edit stamps the post's
/// `published_at`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 2048))]
    pub media: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/v0/posts/{id}",
    tag = "posts",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = MediaPost),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 401, description = "Missing user identity", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, body),
    fields(user_id = %user_ctx.user_id, post_id = %id, operation = "update_post")
)]
pub async fn update_post(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    user_ctx: UserContext,
    ValidatedJson(body): ValidatedJson<UpdatePostRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let post = state
        .posts
        .edit_post(
            id,
            EditPostInput {
                title: body.title,
                description: body.description,
                media: body.media,
            },
        )
        .await?;

    Ok(Json(post))
}
