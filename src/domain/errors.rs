//! Domain error types
//!
//! This module defines the error hierarchy for the intake client. All errors are
//! domain-specific and don't expose third-party HTTP client types.

use std::fmt;
use thiserror::Error;

/// Main intake error type
///
/// This is the primary error type used throughout the crate.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Configuration-related errors (e.g. missing API base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Errors raised by the request client
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Client-side required-field checks failed; no request was sent
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// A workflow step was submitted before its prerequisite step
    #[error("Out of sequence: {0}")]
    OutOfSequence(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl IntakeError {
    /// Returns the field errors if this is a validation failure
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            IntakeError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns the HTTP status if the remote API rejected the request
    pub fn http_status(&self) -> Option<u16> {
        match self {
            IntakeError::Api(api) => api.status(),
            _ => None,
        }
    }
}

/// Request client errors
///
/// Failures are normalized into three kinds: the server answered with a
/// non-success status, the request never completed, or the body could not
/// be decoded. The HTTP variant keeps the raw body text unparsed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response
    #[error("HTTP error! Status: {status}, Details: {body}")]
    Http { status: u16, body: String },

    /// Connection or transport failure
    #[error("Request failed: {0}")]
    Transport(String),

    /// Response body was not the expected JSON shape
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failed response, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A single failed field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field, as it appears in the request body
    pub field: String,

    /// Human readable message shown next to the input
    pub message: String,
}

/// Collected per-field validation failures for one form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Creates an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for a field
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Returns true when no field failed
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for `field`
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Iterates over all recorded errors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Turns the collected errors into a result carrying `value` when empty
    pub fn into_result<T>(self, value: T) -> std::result::Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl From<ValidationErrors> for IntakeError {
    fn from(errors: ValidationErrors) -> Self {
        IntakeError::Validation(errors)
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        IntakeError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for IntakeError {
    fn from(err: toml::de::Error) -> Self {
        IntakeError::Configuration(format!("TOML parse error: {err}"))
    }
}
