//! Errors raised while mapping node results into entities.

use pascal_primitives::PrimitiveError;
use thiserror::Error;

/// Mapping failure, always naming the field or context involved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A required field is absent or null.
    #[error("Missing field '{field}'")]
    MissingField {
        /// Field name.
        field: String,
    },

    /// A field is present but has the wrong shape.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// Field name.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// A field failed primitive validation.
    #[error("Invalid field '{field}': {source}")]
    Validation {
        /// Field name.
        field: String,
        /// Validation failure.
        #[source]
        source: PrimitiveError,
    },

    /// An object was expected.
    #[error("{context}: expected object")]
    ExpectedObject {
        /// Where the value came from.
        context: String,
    },

    /// An array was expected.
    #[error("{context}: expected array")]
    ExpectedArray {
        /// Where the value came from.
        context: String,
    },
}

impl ModelError {
    pub fn missing<S: Into<String>>(field: S) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid<S: Into<String>, M: Into<String>>(field: S, message: M) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for entity mapping.
pub type ModelResult<T> = std::result::Result<T, ModelError>;
