//! Error context extension trait
//!
//! Provides `.context()` / `.with_context()` for `Result<T, IntakeError>`,
//! similar to `anyhow::Context` but keeping the domain error type in library code.
//!
//! # Examples
//!
//! ```rust
//! use clinic_intake::domain::Result;
//! use clinic_intake::domain::context::ResultExt;
//!
//! fn read_form(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_context(|| format!("Failed to read form file: {}", path))
//! }
//! ```

use crate::domain::errors::IntakeError;
use crate::domain::result::Result;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error (evaluated eagerly)
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static;

    /// Add context to an error using a closure, evaluated only on error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<IntakeError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| {
            let base_error = e.into();
            IntakeError::Other(format!("{context}: {base_error}"))
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| {
            let base_error = e.into();
            let context = f();
            IntakeError::Other(format!("{context}: {base_error}"))
        })
    }
}
