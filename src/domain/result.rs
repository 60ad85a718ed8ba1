//! Result type alias for the intake client

use super::errors::IntakeError;

/// Result type alias for intake operations
///
/// # Examples
///
/// ```
/// use clinic_intake::domain::result::Result;
/// use clinic_intake::domain::errors::IntakeError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(IntakeError::Configuration("API base URL is not defined".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, IntakeError>;
