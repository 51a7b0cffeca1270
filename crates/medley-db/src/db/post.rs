use async_trait::async_trait;
use medley_core::{
    models::{MediaPost, MediaPostUpdate, NewMediaPost},
    AppError, PostStore,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const POST_COLUMNS: &str = "id, user_id, title, description, media, created_at, published_at";

/// Postgres repository for media posts.
///
/// Listing order is `created_at` descending; the `seq` identity column
/// breaks ties so same-instant inserts come back most recent first.
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PostRepository {
    #[tracing::instrument(skip(self, post), fields(db.table = "posts", db.operation = "insert"))]
    async fn create(&self, post: NewMediaPost) -> Result<MediaPost, AppError> {
        let created = sqlx::query_as::<Postgres, MediaPost>(&format!(
            r#"
            INSERT INTO posts (user_id, title, description, media, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {POST_COLUMNS}
            "#,
        ))
        .bind(post.user_id)
        .bind(&post.title)
        .bind(&post.description)
        .bind(&post.media)
        .bind(post.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    #[tracing::instrument(skip(self), fields(db.table = "posts", db.operation = "select", db.record_id = %id))]
    async fn get(&self, id: Uuid) -> Result<Option<MediaPost>, AppError> {
        let post = sqlx::query_as::<Postgres, MediaPost>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    #[tracing::instrument(skip(self), fields(db.table = "posts", db.operation = "select"))]
    async fn list_recent_first(&self) -> Result<Vec<MediaPost>, AppError> {
        let posts = sqlx::query_as::<Postgres, MediaPost>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC, seq DESC",
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    #[tracing::instrument(skip(self, changes), fields(db.table = "posts", db.operation = "update", db.record_id = %id))]
    async fn update(
        &self,
        id: Uuid,
        changes: MediaPostUpdate,
    ) -> Result<Option<MediaPost>, AppError> {
        let mut assignments: Vec<String> = Vec::new();
        let mut bind_index = 1;

        if changes.title.is_some() {
            assignments.push(format!("title = ${}", bind_index));
            bind_index += 1;
        }
        if changes.description.is_some() {
            assignments.push(format!("description = ${}", bind_index));
            bind_index += 1;
        }
        if changes.media.is_some() {
            assignments.push(format!("media = ${}", bind_index));
            bind_index += 1;
        }
        if changes.published_at.is_some() {
            assignments.push(format!("published_at = ${}", bind_index));
            bind_index += 1;
        }

        if assignments.is_empty() {
            return self.get(id).await;
        }

        let query = format!(
            "UPDATE posts SET {} WHERE id = ${} RETURNING {POST_COLUMNS}",
            assignments.join(", "),
            bind_index,
        );

        let mut query_builder = sqlx::query_as::<Postgres, MediaPost>(&query);
        if let Some(ref title) = changes.title {
            query_builder = query_builder.bind(title);
        }
        if let Some(ref description) = changes.description {
            query_builder = query_builder.bind(description);
        }
        if let Some(ref media) = changes.media {
            query_builder = query_builder.bind(media);
        }
        if let Some(published_at) = changes.published_at {
            query_builder = query_builder.bind(published_at);
        }
        query_builder = query_builder.bind(id);

        let post = query_builder.fetch_optional(&self.pool).await?;

        Ok(post)
    }

    #[tracing::instrument(skip(self), fields(db.table = "posts", db.operation = "delete", db.record_id = %id))]
    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
