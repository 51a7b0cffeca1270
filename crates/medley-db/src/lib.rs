//! Database layer for Medley.
//!
//! Two [`medley_core::PostStore`] implementations live here: the Postgres
//! repository used in deployments and an in-memory store for tests and
//! embedded setups.

pub mod db;

pub use db::{InMemoryPostStore, PostRepository};
