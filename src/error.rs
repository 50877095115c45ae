//! Error types for item construction and reconstruction.
//!
//! Every failure the crate can report is a variant of [`ItemError`]. Variants
//! are grouped by [`ErrorKind`] so callers can tell a malformed schema
//! annotation apart from a bad keyword or a bad attribute access.

/// Broad classification of an [`ItemError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input or a schema annotation cannot be resolved to a value
    Value,
    /// A record was constructed with the wrong set of fields
    Type,
    /// An attribute outside the declared field set was accessed
    Attribute,
}

/// Main error type for item operations.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    /// Field annotation allows more than one concrete type
    #[error("Field '{field}' has ambiguous annotation {annotation}: cannot pick a type to build")]
    AmbiguousAnnotation { field: String, annotation: String },

    /// Keyword passed to a constructor that the schema does not declare
    #[error("{container}() got an unexpected field '{field}'")]
    UnexpectedField { container: String, field: String },

    /// Same field passed to a constructor more than once
    #[error("{container}() got multiple values for field '{field}'")]
    DuplicateField { container: String, field: String },

    /// Required field missing at construction time
    #[error("{container}() missing required field '{field}'")]
    MissingField { container: String, field: String },

    /// Schema does not descend from the base item schema
    #[error("'{name}' is not a data container")]
    NotAContainer { name: String },

    /// Attribute read or write outside the declared field set
    #[error("'{container}' object has no attribute '{attribute}'")]
    NoSuchAttribute { container: String, attribute: String },

    /// Input has the wrong shape for reconstruction
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Registry lookup by name failed
    #[error("Unknown schema: {name}")]
    UnknownSchema { name: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ItemError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AmbiguousAnnotation { .. }
            | Self::InvalidInput { .. }
            | Self::UnknownSchema { .. }
            | Self::Json(_) => ErrorKind::Value,
            Self::UnexpectedField { .. }
            | Self::DuplicateField { .. }
            | Self::MissingField { .. }
            | Self::NotAContainer { .. } => ErrorKind::Type,
            Self::NoSuchAttribute { .. } => ErrorKind::Attribute,
        }
    }

    /// Create an ambiguous annotation error
    pub fn ambiguous(field: impl Into<String>, annotation: impl std::fmt::Display) -> Self {
        Self::AmbiguousAnnotation {
            field: field.into(),
            annotation: annotation.to_string(),
        }
    }

    /// Create an unexpected field error
    pub fn unexpected_field(container: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnexpectedField {
            container: container.into(),
            field: field.into(),
        }
    }

    /// Create a duplicate field error
    pub fn duplicate_field(container: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateField {
            container: container.into(),
            field: field.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(container: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            container: container.into(),
            field: field.into(),
        }
    }

    /// Create a no-such-attribute error
    pub fn no_such_attribute(container: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::NoSuchAttribute {
            container: container.into(),
            attribute: attribute.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

pub type ItemResult<T> = Result<T, ItemError>;
