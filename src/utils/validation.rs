//! Input validation shared by the CLI and the web API.

use thiserror::Error;

/// Maximum accepted verse length in characters
pub const MAX_SHLOKA_CHARS: usize = 1000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Shloka text is required")]
    Empty,

    #[error("Shloka text too long (max {MAX_SHLOKA_CHARS} characters)")]
    TooLong,
}

/// Validate and sanitize a verse before analysis.
///
/// Trims surrounding whitespace, rejects empty or oversized input, and
/// strips anything that looks like an HTML tag.
pub fn validate_shloka(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if trimmed.chars().count() > MAX_SHLOKA_CHARS {
        return Err(ValidationError::TooLong);
    }

    let stripped = strip_html_tags(trimmed);
    let cleaned = stripped.trim();
    if cleaned.is_empty() {
        return Err(ValidationError::Empty);
    }

    Ok(cleaned.to_string())
}

/// Remove HTML-like tags. An unterminated `<` swallows the rest of the
/// input, so `<script` cannot slip through by omitting the closing bracket.
#[must_use]
pub fn strip_html_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '<' {
            for inner in chars.by_ref() {
                if inner == '>' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_is_trimmed() {
        assert_eq!(validate_shloka("  mātā  ").unwrap(), "mātā");
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(validate_shloka(""), Err(ValidationError::Empty));
        assert_eq!(validate_shloka("   \n  "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_too_long_rejected() {
        let long = "a".repeat(MAX_SHLOKA_CHARS + 1);
        assert_eq!(validate_shloka(&long), Err(ValidationError::TooLong));

        let exact = "a".repeat(MAX_SHLOKA_CHARS);
        assert!(validate_shloka(&exact).is_ok());
    }

    #[test]
    fn test_html_tags_stripped() {
        assert_eq!(
            validate_shloka("<b>mātā</b> pitā").unwrap(),
            "mātā pitā"
        );
        assert_eq!(
            validate_shloka("<script>alert(1)</script>mātā").unwrap(),
            "alert(1)mātā"
        );
    }

    #[test]
    fn test_unterminated_tag_swallows_rest() {
        assert_eq!(validate_shloka("mātā <script").unwrap(), "mātā");
    }

    #[test]
    fn test_tags_only_input_rejected() {
        assert_eq!(validate_shloka("<br><hr>"), Err(ValidationError::Empty));
    }
}
