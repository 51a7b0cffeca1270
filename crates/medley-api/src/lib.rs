//! Medley HTTP API.
//!
//! A thin axum layer over [`medley_services::PostService`]: `handlers` hold
//! the endpoint implementations, `setup` assembles the router and server,
//! and `auth` reads the gateway-provided caller identity.

pub mod api_doc;
pub mod auth;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
