//! Field-validation rules for categories and videos.
//!
//! Lengths are counted in characters, not bytes. All checks run before any
//! store access; a failure maps to HTTP 400 at the boundary.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateUrl;

use crate::error::CoreError;
use crate::types::DbId;

/// Hex color of the form `#RRGGBB`.
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#[A-Fa-f0-9]{6}$").expect("valid regex"));

/// Validate category fields: name 3-50 chars, color `#RRGGBB`.
pub fn validate_category(name: &str, color: &str) -> Result<(), CoreError> {
    check_length("name", name, 3, 50)?;

    if color.chars().count() != 7 {
        return Err(CoreError::Validation(
            "color must be exactly 7 characters".into(),
        ));
    }
    if !HEX_COLOR_RE.is_match(color) {
        return Err(CoreError::Validation(
            "color must be a hex color of the form #RRGGBB".into(),
        ));
    }

    Ok(())
}

/// Validate video fields: title 3-100 chars, description 10-2000 chars,
/// url 10-2048 chars and well-formed, category reference positive.
pub fn validate_video(
    title: &str,
    description: &str,
    url: &str,
    category_id: DbId,
) -> Result<(), CoreError> {
    check_length("title", title, 3, 100)?;
    check_length("description", description, 10, 2_000)?;
    check_length("url", url, 10, 2_048)?;

    if !url.validate_url() {
        return Err(CoreError::Validation("url must be a well-formed URL".into()));
    }

    if category_id < 1 {
        return Err(CoreError::Validation(
            "category_id must be a positive identifier".into(),
        ));
    }

    Ok(())
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_category_passes() {
        assert!(validate_category("Movies", "#FFFF00").is_ok());
        assert!(validate_category("Doc", "#a1B2c3").is_ok());
    }

    #[test]
    fn short_or_long_name_is_rejected() {
        assert!(validate_category("ab", "#000000").is_err());
        assert!(validate_category(&"x".repeat(51), "#000000").is_err());
        // Boundaries are inclusive.
        assert!(validate_category("abc", "#000000").is_ok());
        assert!(validate_category(&"x".repeat(50), "#000000").is_ok());
    }

    #[test]
    fn malformed_color_is_rejected() {
        assert!(validate_category("Movies", "000000").is_err());
        assert!(validate_category("Movies", "#00000").is_err());
        assert!(validate_category("Movies", "#0000000").is_err());
        assert!(validate_category("Movies", "#GGGGGG").is_err());
    }

    #[test]
    fn valid_video_passes() {
        assert!(validate_video(
            "The Matrix",
            "A 1999 science fiction action film.",
            "https://youtu.be/vKQi3bBA1y8",
            1,
        )
        .is_ok());
    }

    #[test]
    fn video_length_bounds_are_enforced() {
        assert!(validate_video("ab", "long enough description", "https://a.example/x", 1).is_err());
        assert!(validate_video("Title", "too short", "https://a.example/x", 1).is_err());
        assert!(validate_video("Title", "long enough description", "http://a.b", 1).is_ok());
        assert!(validate_video(
            "Title",
            "long enough description",
            &format!("https://a.example/{}", "x".repeat(2_048)),
            1,
        )
        .is_err());
    }

    #[test]
    fn malformed_url_is_rejected() {
        assert!(validate_video("Title", "long enough description", "not-a-url!!", 1).is_err());
    }

    #[test]
    fn non_positive_category_reference_is_rejected() {
        let err = validate_video(
            "Title",
            "long enough description",
            "https://a.example/x",
            0,
        );
        assert!(err.is_err());
    }
}
