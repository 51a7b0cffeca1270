//! Post workflow.

pub mod service;

pub use service::{EditPostInput, NewPostInput, PostService};
