//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::IntakeConfig;
use crate::domain::errors::IntakeError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`IntakeConfig`]
/// 4. Applies environment variable overrides (`INTAKE_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced variable is
/// unset, TOML parsing fails, or validation fails (for example when no API
/// base URL is configured).
///
/// # Examples
///
/// ```no_run
/// use clinic_intake::config::loader::load_config;
///
/// let config = load_config("intake.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<IntakeConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(IntakeError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        IntakeError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: IntakeConfig = toml::from_str(&contents)
        .map_err(|e| IntakeError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);
    finish(config)
}

/// Builds configuration from defaults and `INTAKE_*` environment variables only
///
/// # Errors
///
/// Returns a configuration error if validation fails, most commonly because
/// `INTAKE_API_BASE_URL` is not set.
pub fn load_from_env() -> Result<IntakeConfig> {
    let mut config = IntakeConfig::default();
    apply_env_overrides(&mut config);
    finish(config)
}

fn finish(config: IntakeConfig) -> Result<IntakeConfig> {
    config.validate().map_err(|e| {
        IntakeError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| IntakeError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(IntakeError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `INTAKE_` prefix
///
/// Variables follow the pattern `INTAKE_<SECTION>_<KEY>`, for example
/// `INTAKE_API_BASE_URL` or `INTAKE_SEARCH_PAGE_SIZE`.
fn apply_env_overrides(config: &mut IntakeConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("INTAKE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // API overrides
    if let Ok(val) = std::env::var("INTAKE_API_BASE_URL") {
        config.api.base_url = val;
    }
    if let Ok(val) = std::env::var("INTAKE_API_CLINIC_ID") {
        config.api.clinic_id = Some(val);
    }

    // Search overrides
    if let Ok(val) = std::env::var("INTAKE_SEARCH_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.search.page_size = size;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("INTAKE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("INTAKE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("INTAKE_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
