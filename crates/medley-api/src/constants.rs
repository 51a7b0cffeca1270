//! API-wide constants.

/// Version segment for all routes.
pub const API_VERSION: &str = "v0";

/// Route prefix, e.g. `/api/v0/posts`.
pub const API_PREFIX: &str = "/api/v0";

/// Maximum accepted JSON body size in bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;
