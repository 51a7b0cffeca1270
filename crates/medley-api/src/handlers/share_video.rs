use crate::auth::UserContext;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use medley_core::models::MediaPost;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ShareVideoRequest {
    /// A YouTube link in any of the usual shapes (watch, youtu.be, shorts).
    #[validate(length(min = 1, max = 2048))]
    pub link: String,
}

#[utoipa::path(
    post,
    path = "/api/v0/posts/share",
    tag = "posts",
    request_body = ShareVideoRequest,
    responses(
        (status = 201, description = "Video resolved and post created", body = MediaPost),
        (status = 400, description = "Invalid link field", body = ErrorResponse),
        (status = 401, description = "Missing user identity", body = ErrorResponse),
        (status = 422, description = "Link could not be resolved", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, body),
    fields(user_id = %user_ctx.user_id, operation = "share_video")
)]
pub async fn share_video(
    State(state): State<Arc<AppState>>,
    user_ctx: UserContext,
    ValidatedJson(body): ValidatedJson<ShareVideoRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    // Resolution failures surface as 422; the client re-shows the form.
    let post = state
        .posts
        .create_from_video_link(&body.link, user_ctx.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}
