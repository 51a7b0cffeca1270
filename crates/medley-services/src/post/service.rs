//! The post workflow: validation, resolution, and persistence of media
//! posts. This is the only place posts are created, edited, or removed.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use medley_core::models::{MediaPost, MediaPostUpdate, NewMediaPost};
use medley_core::{validation, AppError, PostStore};

use crate::resolver::VideoResolver;

/// Pre-validated fields for creating a post from a submitted form.
#[derive(Debug, Clone)]
pub struct NewPostInput {
    pub title: String,
    pub description: Option<String>,
    pub media: String,
}

/// Field changes for editing a post. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct EditPostInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<String>,
}

/// Turns validated user submissions into persisted [`MediaPost`] entities.
///
/// The service re-checks field constraints at its boundary, stamps the
/// lifecycle timestamps, and maps store absence to [`AppError::NotFound`]
/// where the operation demands it. It holds no state of its own.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
    resolver: Arc<dyn VideoResolver>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>, resolver: Arc<dyn VideoResolver>) -> Self {
        Self { store, resolver }
    }

    /// Create a post from form fields. Stamps `created_at`; the store
    /// generates the id. A single persistence call, no other effects.
    #[tracing::instrument(skip(self, input), fields(user_id = %user_id, operation = "create_post"))]
    pub async fn create_from_form(
        &self,
        user_id: Uuid,
        input: NewPostInput,
    ) -> Result<MediaPost, AppError> {
        validation::validate_title(&input.title)?;
        validation::validate_description(input.description.as_deref())?;
        validation::validate_media_reference(&input.media)?;

        self.store
            .create(NewMediaPost {
                user_id,
                title: input.title,
                description: input.description,
                media: input.media,
                created_at: Utc::now(),
            })
            .await
    }

    /// Share a video link: resolve its metadata, then persist the post.
    ///
    /// Resolution failures propagate untouched and nothing is persisted in
    /// that case; the caller re-prompts the submitter.
    #[tracing::instrument(skip(self), fields(user_id = %user_id, operation = "share_video"))]
    pub async fn create_from_video_link(
        &self,
        link: &str,
        user_id: Uuid,
    ) -> Result<MediaPost, AppError> {
        validation::validate_share_link(link)?;

        let resolved = self.resolver.resolve(link, user_id).await?;

        self.store
            .create(NewMediaPost {
                user_id,
                title: resolved.title,
                description: resolved.description,
                media: resolved.media,
                created_at: Utc::now(),
            })
            .await
    }

    /// Apply field changes and stamp `published_at`. Every edit restamps
    /// it, repeated edits included.
    #[tracing::instrument(skip(self, changes), fields(post_id = %id, operation = "edit_post"))]
    pub async fn edit_post(&self, id: Uuid, changes: EditPostInput) -> Result<MediaPost, AppError> {
        if let Some(title) = changes.title.as_deref() {
            validation::validate_title(title)?;
        }
        validation::validate_description(changes.description.as_deref())?;
        if let Some(media) = changes.media.as_deref() {
            validation::validate_media_reference(media)?;
        }

        self.store
            .update(
                id,
                MediaPostUpdate {
                    title: changes.title,
                    description: changes.description,
                    media: changes.media,
                    published_at: Some(Utc::now()),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
    }

    /// Idempotent delete: an unknown id completes without error.
    #[tracing::instrument(skip(self), fields(post_id = %id, operation = "delete_post"))]
    pub async fn delete_post(&self, id: Uuid) -> Result<(), AppError> {
        let removed = self.store.delete(id).await?;
        if !removed {
            tracing::debug!(post_id = %id, "Delete of unknown post, nothing to do");
        }
        Ok(())
    }

    /// All posts, most recent `created_at` first.
    #[tracing::instrument(skip(self), fields(operation = "list_posts"))]
    pub async fn list_posts(&self) -> Result<Vec<MediaPost>, AppError> {
        self.store.list_recent_first().await
    }

    #[tracing::instrument(skip(self), fields(post_id = %id, operation = "get_post"))]
    pub async fn get_post(&self, id: Uuid) -> Result<MediaPost, AppError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use medley_core::models::ResolvedVideo;
    use medley_db::InMemoryPostStore;

    struct StubResolver(Result<ResolvedVideo, String>);

    #[async_trait]
    impl VideoResolver for StubResolver {
        async fn resolve(&self, _link: &str, _user_id: Uuid) -> Result<ResolvedVideo, AppError> {
            match &self.0 {
                Ok(video) => Ok(video.clone()),
                Err(message) => Err(AppError::Resolution(message.clone())),
            }
        }
    }

    fn sample_video() -> ResolvedVideo {
        ResolvedVideo {
            title: "Never Gonna Give You Up".to_string(),
            description: Some("Official video".to_string()),
            media: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        }
    }

    fn service_with(resolver: StubResolver) -> (PostService, Arc<InMemoryPostStore>) {
        let store = Arc::new(InMemoryPostStore::new());
        let service = PostService::new(store.clone(), Arc::new(resolver));
        (service, store)
    }

    fn service() -> (PostService, Arc<InMemoryPostStore>) {
        service_with(StubResolver(Ok(sample_video())))
    }

    fn form_input(title: &str, media: &str) -> NewPostInput {
        NewPostInput {
            title: title.to_string(),
            description: None,
            media: media.to_string(),
        }
    }

    #[tokio::test]
    async fn create_from_form_round_trips_through_get() {
        let (service, _store) = service();
        let user_id = Uuid::new_v4();

        let created = service
            .create_from_form(user_id, form_input("Trip", "img1.jpg"))
            .await
            .expect("create");

        let fetched = service.get_post(created.id).await.expect("get");
        assert_eq!(fetched.title, "Trip");
        assert_eq!(fetched.media, "img1.jpg");
        assert_eq!(fetched.user_id, user_id);
        assert!(fetched.published_at.is_none());
    }

    #[tokio::test]
    async fn create_from_form_rejects_blank_title() {
        let (service, store) = service();

        let err = service
            .create_from_form(Uuid::new_v4(), form_input("  ", "img1.jpg"))
            .await
            .expect_err("blank title must fail");

        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn share_video_persists_resolved_metadata() {
        let (service, _store) = service();
        let user_id = Uuid::new_v4();

        let created = service
            .create_from_video_link("https://youtu.be/dQw4w9WgXcQ", user_id)
            .await
            .expect("share");

        assert_eq!(created.title, "Never Gonna Give You Up");
        assert_eq!(created.description.as_deref(), Some("Official video"));
        assert_eq!(created.media, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(created.user_id, user_id);
        assert!(created.published_at.is_none());
    }

    #[tokio::test]
    async fn share_video_failure_propagates_and_persists_nothing() {
        let (service, store) =
            service_with(StubResolver(Err("upstream unreachable".to_string())));

        let err = service
            .create_from_video_link("https://youtu.be/dQw4w9WgXcQ", Uuid::new_v4())
            .await
            .expect_err("resolution failure must propagate");

        assert!(matches!(err, AppError::Resolution(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn share_video_rejects_non_http_input_before_resolving() {
        let (service, store) = service();

        let err = service
            .create_from_video_link("watch?v=dQw4w9WgXcQ", Uuid::new_v4())
            .await
            .expect_err("non-URL input must fail");

        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn edit_applies_fields_and_stamps_published_at() {
        let (service, _store) = service();
        let created = service
            .create_from_form(Uuid::new_v4(), form_input("Trip", "img1.jpg"))
            .await
            .unwrap();

        let edited = service
            .edit_post(
                created.id,
                EditPostInput {
                    title: Some("Trip 2024".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("edit");

        assert_eq!(edited.title, "Trip 2024");
        assert_eq!(edited.media, "img1.jpg");
        assert_eq!(edited.created_at, created.created_at);
        assert!(edited.published_at.is_some());
    }

    #[tokio::test]
    async fn repeated_edits_restamp_published_at() {
        let (service, _store) = service();
        let created = service
            .create_from_form(Uuid::new_v4(), form_input("Trip", "img1.jpg"))
            .await
            .unwrap();

        let first = service
            .edit_post(created.id, EditPostInput::default())
            .await
            .unwrap();
        let second = service
            .edit_post(created.id, EditPostInput::default())
            .await
            .unwrap();

        let first_stamp = first.published_at.expect("first edit stamps");
        let second_stamp = second.published_at.expect("second edit stamps");
        assert!(second_stamp >= first_stamp);
    }

    #[tokio::test]
    async fn edit_unknown_post_is_not_found_and_changes_nothing() {
        let (service, store) = service();
        let created = service
            .create_from_form(Uuid::new_v4(), form_input("Trip", "img1.jpg"))
            .await
            .unwrap();

        let err = service
            .edit_post(
                Uuid::new_v4(),
                EditPostInput {
                    title: Some("Changed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect_err("unknown id must fail");

        assert!(matches!(err, AppError::NotFound(_)));
        let untouched = service.get_post(created.id).await.unwrap();
        assert_eq!(untouched.title, "Trip");
        assert!(untouched.published_at.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (service, _store) = service();
        let created = service
            .create_from_form(Uuid::new_v4(), form_input("Trip", "img1.jpg"))
            .await
            .unwrap();

        service.delete_post(created.id).await.expect("first delete");
        service
            .delete_post(created.id)
            .await
            .expect("second delete must also succeed");

        let err = service.get_post(created.id).await.expect_err("gone");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_returns_most_recent_first() {
        let (service, _store) = service();
        let user_id = Uuid::new_v4();

        let a = service
            .create_from_form(user_id, form_input("first", "a.jpg"))
            .await
            .unwrap();
        let b = service
            .create_from_form(user_id, form_input("second", "b.jpg"))
            .await
            .unwrap();
        let c = service
            .create_from_form(user_id, form_input("third", "c.jpg"))
            .await
            .unwrap();

        let listed = service.list_posts().await.unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![c.id, b.id, a.id]);
        assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn full_post_lifecycle() {
        let (service, _store) = service();
        let user_id = Uuid::new_v4();

        let created = service
            .create_from_form(user_id, form_input("Trip", "img1.jpg"))
            .await
            .unwrap();

        let fetched = service.get_post(created.id).await.unwrap();
        assert_eq!(fetched.title, "Trip");
        assert_eq!(fetched.media, "img1.jpg");
        assert!(fetched.published_at.is_none());

        service
            .edit_post(
                created.id,
                EditPostInput {
                    title: Some("Trip 2024".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let edited = service.get_post(created.id).await.unwrap();
        assert_eq!(edited.title, "Trip 2024");
        assert!(edited.published_at.is_some());

        service.delete_post(created.id).await.unwrap();
        let err = service.get_post(created.id).await.expect_err("deleted");
        assert!(matches!(err, AppError::NotFound(_)));
        service.delete_post(created.id).await.expect("still ok");
    }
}
