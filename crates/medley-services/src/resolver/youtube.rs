//! YouTube link resolution via the Data API v3 `videos` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use medley_core::models::ResolvedVideo;
use medley_core::{AppError, ResolverConfig};

use super::VideoResolver;

/// Hosts accepted as YouTube links.
const YOUTUBE_HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "youtu.be",
];

/// YouTube video ids are 11 URL-safe base64 characters.
const VIDEO_ID_LEN: usize = 11;

/// Resolves YouTube links against the Data API v3.
///
/// The HTTP client carries the configured timeout, so a hung upstream
/// surfaces as a resolution failure instead of stalling the request.
pub struct YoutubeResolver {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl YoutubeResolver {
    pub fn new(config: &ResolverConfig) -> Result<Self, AppError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::Internal("YOUTUBE_API_KEY is not configured".to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl VideoResolver for YoutubeResolver {
    #[tracing::instrument(skip(self), fields(user_id = %user_id, operation = "resolve_video"))]
    async fn resolve(&self, link: &str, user_id: Uuid) -> Result<ResolvedVideo, AppError> {
        let video_id = video_id_from_link(link).ok_or_else(|| {
            AppError::Resolution(format!("Not a recognized YouTube link: {}", link))
        })?;

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("part", "snippet"),
                ("id", video_id.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Resolution("Video metadata request timed out".to_string())
                } else {
                    AppError::Resolution(format!("Video metadata request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            return Err(AppError::Resolution(format!(
                "Video host returned status {}",
                response.status()
            )));
        }

        let listing: VideoListResponse = response.json().await.map_err(|e| {
            AppError::Resolution(format!("Malformed video metadata response: {}", e))
        })?;

        // An empty items array means the id is unknown, deleted, or private.
        let snippet = listing
            .items
            .into_iter()
            .next()
            .map(|item| item.snippet)
            .ok_or_else(|| AppError::Resolution(format!("No video found for id {}", video_id)))?;

        tracing::debug!(video_id = %video_id, "Resolved video metadata");

        Ok(ResolvedVideo {
            title: snippet.title,
            description: if snippet.description.is_empty() {
                None
            } else {
                Some(snippet.description)
            },
            media: watch_url(&video_id),
        })
    }
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    snippet: VideoSnippet,
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    title: String,
    #[serde(default)]
    description: String,
}

/// Extract the video id from the common YouTube URL shapes: `watch?v=`,
/// `youtu.be/<id>`, and the `/shorts/`, `/embed/`, `/live/` paths.
/// Returns `None` for foreign hosts and malformed ids.
pub fn video_id_from_link(link: &str) -> Option<String> {
    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))?;
    let (host, path) = match rest.split_once('/') {
        Some((host, path)) => (host, path),
        None => (rest, ""),
    };
    let host = host.split(':').next().unwrap_or(host).to_ascii_lowercase();
    if !YOUTUBE_HOSTS.contains(&host.as_str()) {
        return None;
    }

    let candidate = if host == "youtu.be" {
        path.split(['?', '#']).next().unwrap_or_default()
    } else if let Some(query) = path.strip_prefix("watch?") {
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))?
    } else if let Some(tail) = ["shorts/", "embed/", "live/"]
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix))
    {
        tail.split(['?', '#', '/']).next().unwrap_or_default()
    } else {
        return None;
    };

    is_video_id(candidate).then(|| candidate.to_string())
}

fn is_video_id(s: &str) -> bool {
    s.len() == VIDEO_ID_LEN
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Canonical watch URL stored as the post's media reference.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}
