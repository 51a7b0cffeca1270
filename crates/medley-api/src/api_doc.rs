//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use medley_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Medley API",
        version = "0.1.0",
        description = "Media post sharing API (v0): create, edit, delete, and list media posts, and share YouTube videos as posts. All endpoints are versioned under /api/v0/."
    ),
    paths(
        handlers::post_get::list_posts,
        handlers::post_get::get_post,
        handlers::post_create::create_post,
        handlers::post_update::update_post,
        handlers::post_delete::delete_post,
        handlers::share_video::share_video,
    ),
    components(schemas(
        models::MediaPost,
        handlers::post_create::CreatePostRequest,
        handlers::post_update::UpdatePostRequest,
        handlers::share_video::ShareVideoRequest,
        error::ErrorResponse,
    )),
    tags(
        (name = "posts", description = "Media post operations")
    )
)]
pub struct ApiDoc;
