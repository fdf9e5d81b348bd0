//! API key format validation.
//!
//! Checks the credential at startup so an obviously wrong value fails before
//! the first request instead of as an opaque 400 from the API.

use crate::GEMINI_API_KEY_ENV;
use crate::error::{KeyValidationFailure, SecretsError};

use common::RedactedApiKey;

/// Prefix every issued Google API key starts with.
const GOOGLE_KEY_PREFIX: &str = "AIza";

/// Random characters after [`GOOGLE_KEY_PREFIX`] in an issued key.
const GOOGLE_KEY_BODY_LEN: usize = 35;

/// Validation result for an API key.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(KeyValidationFailure),
}

/// Format rules for one credential.
pub struct KeyValidator {
    /// Credential name for error messages.
    name: &'static str,
    expected_prefix: Option<&'static str>,
    min_length: usize,
    max_length: usize,
}

impl KeyValidator {
    /// Google API keys start with `AI` (in practice `AIza`) and are 39 chars.
    pub fn gemini() -> Self {
        Self {
            name: GEMINI_API_KEY_ENV,
            expected_prefix: Some("AI"),
            min_length: 30,
            max_length: 100,
        }
    }

    /// Validate a key value.
    ///
    /// Returns `ValidationResult::Valid` if the key passes all checks,
    /// or `ValidationResult::Invalid` with the specific failure reason.
    pub fn validate(&self, key: &str) -> ValidationResult {
        let trimmed = key.trim();

        if trimmed.is_empty() {
            return ValidationResult::Invalid(KeyValidationFailure::Empty);
        }

        if trimmed.len() < self.min_length {
            return ValidationResult::Invalid(KeyValidationFailure::TooShort {
                min: self.min_length,
                actual: trimmed.len(),
            });
        }

        if trimmed.len() > self.max_length {
            return ValidationResult::Invalid(KeyValidationFailure::TooLong {
                max: self.max_length,
                actual: trimmed.len(),
            });
        }

        if let Some(expected) = self.expected_prefix {
            if !trimmed.starts_with(expected) {
                let actual_prefix: String = trimmed.chars().take(expected.len()).collect();
                return ValidationResult::Invalid(KeyValidationFailure::InvalidPrefix {
                    expected,
                    actual: actual_prefix,
                });
            }
        }

        if !is_google_key_shape(trimmed) {
            if let Some(pattern) = detect_placeholder(trimmed) {
                return ValidationResult::Invalid(KeyValidationFailure::PlaceholderDetected {
                    pattern,
                });
            }
        }

        if !is_valid_key_chars(trimmed) {
            return ValidationResult::Invalid(KeyValidationFailure::InvalidCharacters);
        }

        ValidationResult::Valid
    }

    /// Validate and wrap in RedactedApiKey if valid.
    #[track_caller]
    pub fn validate_and_wrap(&self, key: String) -> Result<RedactedApiKey, SecretsError> {
        match self.validate(&key) {
            ValidationResult::Valid => Ok(RedactedApiKey::new(key)),
            ValidationResult::Invalid(reason) => Err(SecretsError::key_validation(self.name, reason)),
        }
    }
}

/// `AIza` followed by exactly 35 of `[A-Za-z0-9_-]`.
///
/// The body of an issued key is random, so substrings like `xxx` can occur
/// in it; placeholder patterns are only checked for values not of this shape.
fn is_google_key_shape(key: &str) -> bool {
    key.strip_prefix(GOOGLE_KEY_PREFIX).is_some_and(|body| {
        body.len() == GOOGLE_KEY_BODY_LEN
            && body
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
    })
}

/// Detect values copied from setup guides instead of a real key.
///
/// Returns the matched pattern name if detected.
fn detect_placeholder(key: &str) -> Option<&'static str> {
    let lower = key.to_lowercase();

    static PATTERNS: &[(&str, &str)] = &[
        ("...", "ellipsis"),
        ("your-api-key", "your-api-key"),
        ("your_api_key", "your_api_key"),
        ("your-gemini", "your-gemini"),
        ("<your", "<your...>"),
        ("xxx", "xxx"),
        ("placeholder", "placeholder"),
        ("example", "example"),
        ("changeme", "changeme"),
        ("dummy", "dummy"),
        ("replace", "replace"),
        ("put-your", "put-your"),
        ("enter-your", "enter-your"),
    ];

    for (pattern, name) in PATTERNS {
        if lower.contains(pattern) {
            return Some(name);
        }
    }

    if key.len() >= 10 {
        if let Some(first_char) = key.chars().next() {
            if key.chars().all(|c| c == first_char) {
                return Some("repeated_char");
            }
        }
    }

    None
}

/// Valid: alphanumeric, hyphen, underscore, period, colon
fn is_valid_key_chars(key: &str) -> bool {
    key.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}
