//! Error types for the profile formatting library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all formatting operations.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Stored UTC offset has no entry in the offset table
    #[error("No timezone label configured for UTC offset {offset}s")]
    UnrecognizedOffset { offset: i32 },
    /// Status markup requested for a user without any status
    #[error("User has no status to display")]
    NoStatusAvailable,
    /// Timezone identifier unknown to the timezone database
    #[error("Unknown timezone '{name}': {source}")]
    UnknownTimezone {
        name: String,
        #[source]
        source: jiff::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ProfileError {
        ProfileError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ProfileError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a timezone database lookup failure.
    pub fn unknown_timezone(name: impl Into<String>, source: jiff::Error) -> Self {
        Self::UnknownTimezone {
            name: name.into(),
            source,
        }
    }
}

/// Result type alias for formatting operations
pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = ProfileError::invalid_input("latitude").with_reason("must be finite");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'latitude': must be finite"
        );
    }

    #[test]
    fn test_unrecognized_offset_message() {
        let err = ProfileError::UnrecognizedOffset { offset: 1234 };
        assert_eq!(
            err.to_string(),
            "No timezone label configured for UTC offset 1234s"
        );
    }
}
