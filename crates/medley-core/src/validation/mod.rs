//! Input validation for post fields.
//!
//! Primary validation happens at the HTTP boundary (typed request structs);
//! these checks are the workflow's own guard so no store write can happen
//! with unusable fields.

use crate::error::AppError;

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 5000;
pub const MAX_MEDIA_REFERENCE_LENGTH: usize = 2048;

/// Titles are required, non-blank, and bounded.
pub fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title must not be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Title exceeds {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_description(description: Option<&str>) -> Result<(), AppError> {
    if let Some(description) = description {
        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(AppError::InvalidInput(format!(
                "Description exceeds {} characters",
                MAX_DESCRIPTION_LENGTH
            )));
        }
    }
    Ok(())
}

/// Media references are required and bounded; their shape (object key vs
/// external URL) is up to the caller.
pub fn validate_media_reference(media: &str) -> Result<(), AppError> {
    if media.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Media reference must not be empty".to_string(),
        ));
    }
    if media.len() > MAX_MEDIA_REFERENCE_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Media reference exceeds {} bytes",
            MAX_MEDIA_REFERENCE_LENGTH
        )));
    }
    Ok(())
}

/// Share links must at least be http(s) URLs with a host. Whether the host
/// is a supported video site is the resolver's call, not a validation error.
pub fn validate_share_link(link: &str) -> Result<(), AppError> {
    if link.len() > MAX_MEDIA_REFERENCE_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Share link exceeds {} bytes",
            MAX_MEDIA_REFERENCE_LENGTH
        )));
    }
    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))
        .ok_or_else(|| {
            AppError::InvalidInput("Share link must be an http(s) URL".to_string())
        })?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(AppError::InvalidInput(
            "Share link is missing a host".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_must_not_be_blank() {
        assert!(validate_title("Trip").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn title_length_is_bounded() {
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH)).is_ok());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn description_is_optional() {
        assert!(validate_description(None).is_ok());
        assert!(validate_description(Some("a day at the lake")).is_ok());
        assert!(validate_description(Some(&"a".repeat(MAX_DESCRIPTION_LENGTH + 1))).is_err());
    }

    #[test]
    fn media_reference_must_be_present() {
        assert!(validate_media_reference("img1.jpg").is_ok());
        assert!(validate_media_reference("").is_err());
        assert!(validate_media_reference(" ").is_err());
    }

    #[test]
    fn share_link_requires_http_scheme_and_host() {
        assert!(validate_share_link("https://www.youtube.com/watch?v=dQw4w9WgXcQ").is_ok());
        assert!(validate_share_link("http://youtu.be/dQw4w9WgXcQ").is_ok());
        assert!(validate_share_link("ftp://example.com/video").is_err());
        assert!(validate_share_link("not a link").is_err());
        assert!(validate_share_link("https:///watch?v=dQw4w9WgXcQ").is_err());
    }
}
