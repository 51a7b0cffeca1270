use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// One shared media item and its metadata.
///
/// `created_at` is stamped exactly once, by the workflow, when the post is
/// created. `published_at` stays empty until the post is edited; every edit
/// restamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct MediaPost {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Reference to the stored media: an uploaded object key or an external
    /// link (e.g. a canonical YouTube watch URL).
    pub media: String,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl MediaPost {
    /// A post counts as published once an edit has stamped `published_at`.
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }
}

/// Input record for creating a post. The store generates the id; the
/// workflow stamps `created_at` before handing the record over.
#[derive(Debug, Clone)]
pub struct NewMediaPost {
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub media: String,
    pub created_at: DateTime<Utc>,
}

/// Field changes for an edit. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct MediaPostUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}
