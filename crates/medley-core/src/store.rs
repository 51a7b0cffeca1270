//! Persistence seam for media posts.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{MediaPost, MediaPostUpdate, NewMediaPost};

/// Store abstraction for [`MediaPost`] entities.
///
/// Absence is an explicit value, not an exception: `get` and `update` return
/// `None` for an unknown id, and `delete` reports whether a row was removed.
/// The workflow decides which of these become errors.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post and return it with the store-generated id.
    async fn create(&self, post: NewMediaPost) -> Result<MediaPost, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<MediaPost>, AppError>;

    /// All posts, newest `created_at` first. Equal timestamps order by
    /// insertion, most recently inserted first.
    async fn list_recent_first(&self) -> Result<Vec<MediaPost>, AppError>;

    /// Apply `changes` to the post, returning the updated row, or `None`
    /// when the id is unknown.
    async fn update(
        &self,
        id: Uuid,
        changes: MediaPostUpdate,
    ) -> Result<Option<MediaPost>, AppError>;

    /// Remove the post if present. Returns `false` when nothing was there.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
