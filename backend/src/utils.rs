//! Small helpers shared across handlers.

use crate::errors::ApiError;

/// Reject empty/missing request fields with the 400 `MISSING_FIELD` body.
pub fn required(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::MissingField(field)),
    }
}

/// URL slug from a title: lowercase alphanumerics joined by single dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_accepts_non_empty() {
        assert_eq!(
            required(Some("Budi".to_string()), "fullName").unwrap(),
            "Budi"
        );
    }

    #[test]
    fn required_rejects_missing_and_blank() {
        assert!(matches!(
            required(None, "fullName"),
            Err(ApiError::MissingField("fullName"))
        ));
        assert!(matches!(
            required(Some("   ".to_string()), "fullName"),
            Err(ApiError::MissingField("fullName"))
        ));
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("PPDB 2026/2027: Gelombang 1!"), "ppdb-2026-2027-gelombang-1");
        assert_eq!(slugify("  Hello   World  "), "hello-world");
        assert_eq!(slugify("---"), "");
    }
}
