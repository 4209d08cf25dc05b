//! Positive user identifier validation

use super::ValidationError;

/// Validated positive user id
///
/// `field` names the originating argument so rejection messages can
/// point at it (`from_user_id`, `to_user_id`, `user_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(i64);

impl UserId {
    /// Create a user id, rejecting zero and negative values.
    pub fn new(field: &'static str, value: i64) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::NotPositive { field });
        }
        Ok(Self(value))
    }

    /// Get the raw id.
    pub fn get(self) -> i64 {
        self.0
    }
}
