//! Application state shared across handlers.

use medley_services::PostService;

/// Shared state: the post workflow service. Repositories and the resolver
/// live behind it; handlers never touch the store directly.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    pub fn new(posts: PostService) -> Self {
        Self { posts }
    }
}
