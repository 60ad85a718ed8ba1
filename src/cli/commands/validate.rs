//! Validate config command implementation
//!
//! This module implements the `validate-config` command for checking the
//! configuration file (or the environment) before any request is made.

use super::{load_settings, GlobalOptions};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, options: &GlobalOptions) -> anyhow::Result<i32> {
        let source = options
            .config_path
            .as_deref()
            .unwrap_or("environment (INTAKE_*)");
        tracing::info!(source = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        let config = match load_settings(options) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  API Base URL: {}", config.api.base_url);
        println!(
            "  Clinic ID: {}",
            config.api.clinic_id.as_deref().unwrap_or("(not set)")
        );
        println!("  Search Page Size: {}", config.search.page_size);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_reports_missing_base_url() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"\"").unwrap();

        let options = GlobalOptions {
            config_path: Some(file.path().to_string_lossy().into_owned()),
            clinic_id: None,
        };
        let code = ValidateArgs {}.execute(&options).await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_accepts_complete_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"https://api.example.com\"").unwrap();

        let options = GlobalOptions {
            config_path: Some(file.path().to_string_lossy().into_owned()),
            clinic_id: None,
        };
        let code = ValidateArgs {}.execute(&options).await.unwrap();
        assert_eq!(code, 0);
    }
}
