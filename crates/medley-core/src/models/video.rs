use serde::{Deserialize, Serialize};

/// Metadata resolved from an external video link, ready to become a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedVideo {
    pub title: String,
    /// Hosts may return an empty description; stored as `None` in that case.
    pub description: Option<String>,
    /// Canonical media reference for the video (e.g. the watch URL).
    pub media: String,
}
