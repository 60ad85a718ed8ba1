//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::domain::context::ResultExt;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "intake.toml")]
    pub output: String,

    /// Include comments explaining every setting
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing intake client configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        let written = fs::write(&self.output, config_content)
            .with_context(|| format!("Failed to write {}", self.output));

        match written {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set INTAKE_API_BASE_URL in your environment or .env file");
                println!("  2. Set api.clinic_id (or pass --clinic-id)");
                println!(
                    "  3. Validate configuration: clinic-intake --config {} validate-config",
                    self.output
                );
                println!("  4. Search patients: clinic-intake search --last-name Cruz");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Clinic Intake Configuration File

[application]
log_level = "info"

[api]
base_url = "${INTAKE_API_BASE_URL}"
# clinic_id = "3f2504e0-4f89-11d3-9a0c-0305e82c3301"

[search]
page_size = 10

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Clinic Intake Configuration File
#
# Every value can be overridden with an environment variable named
# INTAKE_<SECTION>_<KEY>, e.g. INTAKE_API_BASE_URL or INTAKE_SEARCH_PAGE_SIZE.
# ${VAR} references are replaced with the variable's value when loading.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Intake API
# ============================================================================
[api]
# Base URL of the intake API (required, http:// or https://)
base_url = "${INTAKE_API_BASE_URL}"

# Clinic identifier sent as the X-Clinic-Id header on every request.
# Leave unset to send no clinic header.
# clinic_id = "3f2504e0-4f89-11d3-9a0c-0305e82c3301"

# ============================================================================
# Patient Search
# ============================================================================
[search]
# Results per page (1-100)
page_size = 10

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Write JSON logs to rotating files in addition to the console
local_enabled = false

# Directory for log files
local_path = "logs"

# Rotation policy (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "intake.toml".to_string(),
            with_examples: false,
            force: false,
        };

        assert_eq!(args.output, "intake.toml");
        assert!(!args.with_examples);
        assert!(!args.force);
    }

    #[test]
    fn test_generate_minimal_config() {
        let config = InitArgs::generate_minimal_config();
        assert!(config.contains("[application]"));
        assert!(config.contains("[api]"));
        assert!(config.contains("[search]"));
    }

    #[test]
    fn test_generated_configs_parse() {
        for content in [
            InitArgs::generate_minimal_config(),
            InitArgs::generate_config_with_examples(),
        ] {
            let config: crate::config::IntakeConfig = toml::from_str(&content).unwrap();
            assert_eq!(config.search.page_size, 10);
            assert!(config.api.clinic_id.is_none());
        }
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("intake.toml");
        std::fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().into_owned(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(std::fs::read_to_string(&output)
            .unwrap()
            .contains("[api]"));
    }
}
