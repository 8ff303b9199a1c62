use serde::Serialize;
use thiserror::Error;

/// A single field-level violation found while validating a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Machine-readable violation kind (`invalid_type`, `invalid_date`, ...).
    pub code: String,
    /// Key path of the offending value. Empty when the body itself is wrong.
    pub path: Vec<String>,
    pub message: String,
}

impl FieldError {
    pub fn new(code: &str, field: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            path: if field.is_empty() {
                Vec::new()
            } else {
                vec![field.to_string()]
            },
            message: message.into(),
        }
    }

    /// The dotted form of `path`, used in logs and `Display`.
    pub fn field(&self) -> String {
        self.path.join(".")
    }
}

/// Application-wide error types for Barrister.
#[derive(Error, Debug)]
pub enum AppError {
    /// The request body failed one or more field constraints.
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    /// The request was unusable for a reason other than field validation.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns the field violations when this is a validation failure.
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| {
            let field = e.field();
            if field.is_empty() {
                e.message.clone()
            } else {
                format!("{field}: {}", e.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
