//! Message content validation

use super::ValidationError;

/// Maximum length for post and message content, in chars
pub const MAX_CONTENT_LEN: usize = 10_000;

/// Validated, trimmed content for a post or private message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContent(String);

impl MessageContent {
    /// Create new message content.
    ///
    /// # Rules
    /// - Surrounding whitespace is trimmed before any other check
    /// - Empty or whitespace-only input is rejected
    /// - Trimmed length above 10,000 chars is rejected
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "content" });
        }

        let len = trimmed.chars().count();
        if len > MAX_CONTENT_LEN {
            return Err(ValidationError::TooLong {
                field: "content",
                actual: len,
                max: MAX_CONTENT_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for MessageContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
