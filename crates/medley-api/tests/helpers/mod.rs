//! Shared helpers for API integration tests.
//!
//! Tests run the real router over the in-memory store and a stub resolver,
//! so they exercise handler + workflow + store semantics without a database
//! or network.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use medley_api::constants::API_PREFIX;
use medley_api::setup;
use medley_api::state::AppState;
use medley_core::models::ResolvedVideo;
use medley_core::{AppError, BaseConfig, Config, ResolverConfig};
use medley_db::InMemoryPostStore;
use medley_services::{PostService, VideoResolver};
use uuid::Uuid;

/// Returns the versioned API path, e.g. `api_path("/posts")` -> `/api/v0/posts`.
pub fn api_path(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

/// Resolver double: hands back a fixed success or a resolution failure.
pub enum StubResolver {
    Success(ResolvedVideo),
    Failure(String),
}

#[async_trait]
impl VideoResolver for StubResolver {
    async fn resolve(&self, _link: &str, _user_id: Uuid) -> Result<ResolvedVideo, AppError> {
        match self {
            StubResolver::Success(video) => Ok(video.clone()),
            StubResolver::Failure(message) => Err(AppError::Resolution(message.clone())),
        }
    }
}

pub fn sample_video() -> ResolvedVideo {
    ResolvedVideo {
        title: "Never Gonna Give You Up".to_string(),
        description: Some("Official video".to_string()),
        media: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
    }
}

fn test_config() -> Config {
    Config {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["*".to_string()],
            db_max_connections: 1,
            db_timeout_seconds: 5,
            environment: "test".to_string(),
        },
        database_url: "postgres://unused".to_string(),
        resolver: ResolverConfig {
            api_key: Some("test-key".to_string()),
            endpoint: "http://127.0.0.1:0".to_string(),
            timeout_seconds: 1,
        },
    }
}

/// Test application: the HTTP server plus a handle on the backing store.
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryPostStore>,
}

pub fn setup_test_app_with_resolver(resolver: Arc<dyn VideoResolver>) -> TestApp {
    let store = Arc::new(InMemoryPostStore::new());
    let service = PostService::new(store.clone(), resolver);
    let state = Arc::new(AppState::new(service));

    let router = setup::build_router(&test_config(), state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp { server, store }
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with_resolver(Arc::new(StubResolver::Success(sample_video())))
}
