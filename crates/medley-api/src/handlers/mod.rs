//! HTTP handlers, one module per operation.

pub mod post_create;
pub mod post_delete;
pub mod post_get;
pub mod post_update;
pub mod share_video;
