//! Video link resolution.
//!
//! Turns an external video link into the metadata needed to store a media
//! post. [`YoutubeResolver`] is the production implementation.

pub mod youtube;

pub use youtube::YoutubeResolver;

use async_trait::async_trait;
use uuid::Uuid;

use medley_core::models::ResolvedVideo;
use medley_core::AppError;

/// Resolver for external video links.
#[async_trait]
pub trait VideoResolver: Send + Sync {
    /// Fetch title, description, and a canonical media reference for `link`.
    ///
    /// Fails with [`AppError::Resolution`] when the link is not a supported
    /// video URL, the video is unknown, or the upstream call fails or times
    /// out. The caller decides how to re-prompt; nothing is retried here.
    async fn resolve(&self, link: &str, user_id: Uuid) -> Result<ResolvedVideo, AppError>;
}
