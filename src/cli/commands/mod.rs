//! CLI command implementations
//!
//! Commands return the process exit code:
//! 0 success, 1 invalid input, 2 configuration error,
//! 4 HTTP or connection error, 5 fatal error.

pub mod create_patient;
pub mod dental_history;
pub mod init;
pub mod intake;
pub mod medical_history;
pub mod search;
pub mod validate;

use crate::adapters::api::HttpIntakeApi;
use crate::config::{load_config, load_from_env, IntakeConfig, LoggingConfig};
use crate::domain::{IntakeError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Configuration file; environment only when absent
    pub config_path: Option<String>,

    /// Clinic id overriding `api.clinic_id`
    pub clinic_id: Option<String>,
}

/// Loads configuration and applies the `--clinic-id` override
pub(crate) fn load_settings(options: &GlobalOptions) -> Result<IntakeConfig> {
    let mut config = match &options.config_path {
        Some(path) => load_config(path)?,
        None => load_from_env()?,
    };

    if let Some(clinic_id) = options.clinic_id.as_deref() {
        if !clinic_id.trim().is_empty() {
            config.api.clinic_id = Some(clinic_id.trim().to_string());
        }
    }

    Ok(config)
}

/// Log level and logging settings for the process
///
/// `--log-level` wins over `application.log_level`. If the configuration
/// cannot be loaded, logging falls back to the console at `info` and the
/// command reports the configuration error itself.
pub fn logging_settings(
    options: &GlobalOptions,
    cli_level: Option<&str>,
) -> (String, LoggingConfig) {
    match load_settings(options) {
        Ok(config) => (
            cli_level
                .map(str::to_string)
                .unwrap_or(config.application.log_level),
            config.logging,
        ),
        Err(_) => (
            cli_level.unwrap_or("info").to_string(),
            LoggingConfig::default(),
        ),
    }
}

/// Configuration plus the HTTP API built from it
pub(crate) fn build_api(options: &GlobalOptions) -> Result<(IntakeConfig, HttpIntakeApi)> {
    let config = load_settings(options)?;
    let api = HttpIntakeApi::from_config(&config.api)?;
    tracing::debug!(
        base_url = %config.api.base_url,
        clinic_scoped = config.api.clinic_id.is_some(),
        "API client ready"
    );
    Ok((config, api))
}

/// Reads a JSON document from disk
pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| IntakeError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_json::from_str(&contents).map_err(|e| {
        IntakeError::Serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })
}

/// Exit code for an error
pub(crate) fn exit_code(err: &IntakeError) -> i32 {
    match err {
        IntakeError::Validation(_)
        | IntakeError::OutOfSequence(_)
        | IntakeError::Serialization(_) => 1,
        IntakeError::Configuration(_) => 2,
        IntakeError::Api(_) => 4,
        IntakeError::Io(_) | IntakeError::Other(_) => 5,
    }
}

/// Prints an error for the user and returns its exit code
pub(crate) fn report_error(err: &IntakeError) -> i32 {
    tracing::error!(error = %err, "Command failed");

    match err.validation_errors() {
        Some(errors) => {
            println!("❌ Please correct the following fields:");
            for error in errors.iter() {
                println!("   - {}: {}", error.field, error.message);
            }
        }
        None => {
            println!("❌ {}", headline(err));
            println!("   Error: {err}");
        }
    }

    exit_code(err)
}

fn headline(err: &IntakeError) -> &'static str {
    match err {
        IntakeError::Configuration(_) => "Configuration problem",
        IntakeError::Api(_) => "The intake API request failed",
        IntakeError::OutOfSequence(_) => "Intake steps submitted out of order",
        IntakeError::Io(_) | IntakeError::Serialization(_) => "Could not read input",
        _ => "Unexpected failure",
    }
}
