// Centralized error handling for the user service

use juniper::{FieldError, IntoFieldError, ScalarValue, Value};
use thiserror::Error;

/// Outcome kinds for user operations.
///
/// `InvalidId` arises only while parsing identifier arguments at the API
/// boundary; `NotFound` only on the update path of the service layer.
#[derive(Error, Debug)]
pub enum UserError {
    #[error("Invalid UUID format")]
    InvalidId,

    #[error("User not found")]
    NotFound,

    /// A persisted row failed to decode.
    #[error("Invalid persisted record: {0}")]
    InvalidRow(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl<S: ScalarValue> IntoFieldError<S> for UserError {
    fn into_field_error(self) -> FieldError<S> {
        FieldError::new(self, Value::null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(UserError::InvalidId.to_string(), "Invalid UUID format");
        assert_eq!(UserError::NotFound.to_string(), "User not found");
    }

    #[test]
    fn test_field_error_carries_message() {
        let err: FieldError = UserError::NotFound.into_field_error();
        assert_eq!(err.message(), "User not found");
    }
}
