use async_trait::async_trait;
use medley_core::{
    models::{MediaPost, MediaPostUpdate, NewMediaPost},
    AppError, PostStore,
};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory [`PostStore`] with the same observable semantics as the
/// Postgres repository. The backing Vec keeps insertion order, which is
/// what the listing tie-break is defined against.
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: RwLock<Vec<MediaPost>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts. Handy for asserting nothing was persisted.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn create(&self, post: NewMediaPost) -> Result<MediaPost, AppError> {
        let created = MediaPost {
            id: Uuid::new_v4(),
            user_id: post.user_id,
            title: post.title,
            description: post.description,
            media: post.media,
            created_at: post.created_at,
            published_at: None,
        };
        self.posts.write().await.push(created.clone());
        Ok(created)
    }

    async fn get(&self, id: Uuid) -> Result<Option<MediaPost>, AppError> {
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn list_recent_first(&self) -> Result<Vec<MediaPost>, AppError> {
        // Reverse insertion order first; the stable sort then leaves
        // same-instant posts most recently inserted first.
        let mut posts: Vec<MediaPost> = self.posts.read().await.iter().rev().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: MediaPostUpdate,
    ) -> Result<Option<MediaPost>, AppError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(title) = changes.title {
            post.title = title;
        }
        if let Some(description) = changes.description {
            post.description = Some(description);
        }
        if let Some(media) = changes.media {
            post.media = media;
        }
        if let Some(published_at) = changes.published_at {
            post.published_at = Some(published_at);
        }
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn new_post(title: &str, created_at: chrono::DateTime<Utc>) -> NewMediaPost {
        NewMediaPost {
            user_id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            media: "img1.jpg".to_string(),
            created_at,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_leaves_published_at_unset() {
        let store = InMemoryPostStore::new();
        let created = store
            .create(new_post("Trip", Utc::now()))
            .await
            .expect("create");

        assert_eq!(created.title, "Trip");
        assert!(created.published_at.is_none());

        let fetched = store.get(created.id).await.expect("get");
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn list_orders_by_created_at_then_insertion() {
        let store = InMemoryPostStore::new();
        let early = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2026, 1, 2, 12, 0, 0).unwrap();

        let a = store.create(new_post("a", early)).await.unwrap();
        let b = store.create(new_post("b", late)).await.unwrap();
        // Same instant as `b`: inserted later, so listed before it.
        let c = store.create(new_post("c", late)).await.unwrap();

        let listed = store.list_recent_first().await.unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![c.id, b.id, a.id]);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let store = InMemoryPostStore::new();
        let result = store
            .update(Uuid::new_v4(), MediaPostUpdate::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_reports_absence_without_error() {
        let store = InMemoryPostStore::new();
        let created = store.create(new_post("Trip", Utc::now())).await.unwrap();

        assert!(store.delete(created.id).await.unwrap());
        assert!(!store.delete(created.id).await.unwrap());
    }
}
