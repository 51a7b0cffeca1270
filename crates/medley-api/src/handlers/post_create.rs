use crate::auth::UserContext;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use medley_core::models::MediaPost;
use medley_services::NewPostInput;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    /// Reference to the stored media: an uploaded object key or an
    /// external link.
    #[validate(length(min = 1, max = 2048))]
    pub media: String,
}

#[utoipa::path(
    post,
    path = "/api/v0/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = MediaPost),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 401, description = "Missing user identity", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, body),
    fields(user_id = %user_ctx.user_id, operation = "create_post")
)]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    user_ctx: UserContext,
    ValidatedJson(body): ValidatedJson<CreatePostRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let post = state
        .posts
        .create_from_form(
            user_ctx.user_id,
            NewPostInput {
                title: body.title,
                description: body.description,
                media: body.media,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}
