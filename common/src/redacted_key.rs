//! API credential wrapper with redacted Debug output.

use crate::{ErrorLocation, RedactError};

use std::fmt;

use serde::ser::Error;
use zeroize::Zeroize;

/// Number of leading characters `masked()` is allowed to reveal.
const MASK_VISIBLE_PREFIX: usize = 4;

/// An API key that never exposes its value in logs or debug output.
///
/// The Gemini credential lives in one of these from the moment it is read
/// out of the environment or the secrets file until the process exits.
#[derive(Clone)]
pub struct RedactedApiKey {
    inner: String,
}

impl RedactedApiKey {
    /// Wrap a key, dropping surrounding whitespace picked up from env files.
    pub fn new(key: impl Into<String>) -> Self {
        let mut raw: String = key.into();
        let trimmed = raw.trim().to_string();
        raw.zeroize();
        Self { inner: trimmed }
    }

    /// Get the actual key value for transmission.
    ///
    /// # Security Note
    /// Only call this when building the outbound request header.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the key length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Short form for log lines: the first few characters and the length.
    pub fn masked(&self) -> String {
        let prefix: String = self.inner.chars().take(MASK_VISIBLE_PREFIX).collect();
        format!("{prefix}… ({} chars)", self.inner.len())
    }
}

impl fmt::Debug for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedApiKey([REDACTED])")
    }
}

impl fmt::Display for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for RedactedApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedApiKey {
    #[track_caller]
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from("RedactedApiKey cannot be serialized - use as_str() explicitly"),
            location: ErrorLocation::caller(),
        }))
    }
}
