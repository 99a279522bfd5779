//! Canonical code generation from display names.
//!
//! Companies and industries are keyed by a lowercase, URL-safe code derived
//! from their display name at creation time.

use thiserror::Error;

/// Errors from code normalization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    /// The display name contains no usable characters.
    #[error("Cannot derive a code from '{0}'")]
    InvalidInput(String),
}

/// Converts a display name into a canonical code.
///
/// Lowercases the input, replaces each run of non-alphanumeric characters
/// with a single hyphen, and trims leading/trailing hyphens.
///
/// # Errors
///
/// Returns `SlugError::InvalidInput` when the name is empty or normalizes
/// to an empty string.
pub fn normalize(display_name: &str) -> Result<String, SlugError> {
    let mut code = String::with_capacity(display_name.len());

    for c in display_name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            code.push(c);
        } else if !code.is_empty() && !code.ends_with('-') {
            code.push('-');
        }
    }

    // A trailing run of separators leaves a dangling hyphen.
    let code = code.trim_end_matches('-');

    if code.is_empty() {
        return Err(SlugError::InvalidInput(display_name.to_string()));
    }

    Ok(code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_name() {
        assert_eq!(normalize("Apple Computer").unwrap(), "apple-computer");
    }

    #[test]
    fn test_punctuation_collapses_to_single_hyphen() {
        assert_eq!(
            normalize("Smith & Sons, Ltd.").unwrap(),
            "smith-sons-ltd"
        );
    }

    #[test]
    fn test_leading_trailing_separators_trimmed() {
        assert_eq!(normalize("  --IBM--  ").unwrap(), "ibm");
    }

    #[test]
    fn test_uppercase_lowered() {
        assert_eq!(normalize("ACME").unwrap(), "acme");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(normalize("Area 51 Exports").unwrap(), "area-51-exports");
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            normalize(""),
            Err(SlugError::InvalidInput(String::new()))
        );
    }

    #[test]
    fn test_whitespace_only_rejected() {
        assert!(normalize("   ").is_err());
    }

    #[test]
    fn test_punctuation_only_rejected() {
        assert!(normalize("!!!***").is_err());
    }

    mod props {
        use proptest::prelude::*;

        use super::super::normalize;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            /// Every successful normalization yields only lowercase
            /// alphanumerics and single interior hyphens.
            #[test]
            fn prop_output_is_valid_code(name in ".{0,64}") {
                if let Ok(code) = normalize(&name) {
                    prop_assert!(!code.is_empty());
                    prop_assert!(!code.starts_with('-'));
                    prop_assert!(!code.ends_with('-'));
                    prop_assert!(!code.contains("--"));
                    prop_assert!(
                        code.chars()
                            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
                    );
                }
            }

            /// Normalization is idempotent: a derived code normalizes to itself.
            #[test]
            fn prop_idempotent(name in ".{0,64}") {
                if let Ok(code) = normalize(&name) {
                    prop_assert_eq!(normalize(&code).unwrap(), code);
                }
            }
        }
    }
}
