//! Integration tests for configuration loading and validation
//!
//! Every test here reads `INTAKE_*` variables, so they all hold `ENV_MUTEX`.

use clinic_intake::adapters::api::HttpIntakeApi;
use clinic_intake::config::{load_config, load_from_env};
use clinic_intake::domain::{ClinicId, IntakeError};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("INTAKE_APPLICATION_LOG_LEVEL");
    std::env::remove_var("INTAKE_API_BASE_URL");
    std::env::remove_var("INTAKE_API_CLINIC_ID");
    std::env::remove_var("INTAKE_SEARCH_PAGE_SIZE");
    std::env::remove_var("INTAKE_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("INTAKE_LOGGING_LOCAL_PATH");
    std::env::remove_var("INTAKE_LOGGING_LOCAL_ROTATION");
    std::env::remove_var("TEST_INTAKE_BASE_URL");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[api]
base_url = "https://intake.example.com/api"
clinic_id = "3f2504e0-4f89-11d3-9a0c-0305e82c3301"

[search]
page_size = 25

[logging]
local_enabled = true
local_path = "/tmp/clinic-intake"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.api.base_url, "https://intake.example.com/api");
    assert_eq!(
        config.api.clinic_id.as_deref(),
        Some("3f2504e0-4f89-11d3-9a0c-0305e82c3301")
    );
    assert_eq!(config.search.page_size, 25);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/clinic-intake");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[api]
base_url = "http://localhost:3000"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "info");
    assert!(config.api.clinic_id.is_none());
    assert_eq!(config.search.page_size, 10);
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_INTAKE_BASE_URL", "https://substituted.example.com");

    let temp_file = write_config(
        r#"
[api]
# base_url = "${TEST_INTAKE_UNSET_IN_COMMENT}"
base_url = "${TEST_INTAKE_BASE_URL}"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.api.base_url, "https://substituted.example.com");

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[api]
base_url = "${TEST_INTAKE_BASE_URL}"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, IntakeError::Configuration(_)));
    assert!(err.to_string().contains("TEST_INTAKE_BASE_URL"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("INTAKE_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("INTAKE_API_CLINIC_ID", "clinic-from-env");
    std::env::set_var("INTAKE_SEARCH_PAGE_SIZE", "50");

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[api]
base_url = "https://intake.example.com"
clinic_id = "clinic-from-file"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.api.clinic_id.as_deref(), Some("clinic-from-env"));
    assert_eq!(config.search.page_size, 50);

    cleanup_env_vars();
}

#[test]
fn test_missing_base_url_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[api]
clinic_id = "clinic-1"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, IntakeError::Configuration(_)));
    assert!(err.to_string().contains("api.base_url"));
}

#[test]
fn test_invalid_values_are_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    for content in [
        "[api]\nbase_url = \"ftp://intake.example.com\"\n",
        "[api]\nbase_url = \"https://intake.example.com\"\nclinic_id = \"  \"\n",
        "[api]\nbase_url = \"https://intake.example.com\"\n[search]\npage_size = 0\n",
        "[api]\nbase_url = \"https://intake.example.com\"\n[application]\nlog_level = \"loud\"\n",
        "[api]\nbase_url = \"https://intake.example.com\"\n[logging]\nlocal_rotation = \"size\"\n",
    ] {
        let temp_file = write_config(content);
        let result = load_config(temp_file.path());
        assert!(
            matches!(result, Err(IntakeError::Configuration(_))),
            "expected rejection for:\n{content}"
        );
    }
}

#[test]
fn test_invalid_toml() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[api\nbase_url = ");
    assert!(matches!(
        load_config(temp_file.path()),
        Err(IntakeError::Configuration(_))
    ));
}

#[test]
fn test_load_from_env_only() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    assert!(load_from_env().is_err());

    std::env::set_var("INTAKE_API_BASE_URL", "http://localhost:3000");
    std::env::set_var("INTAKE_API_CLINIC_ID", "clinic-9");
    let config = load_from_env().expect("Failed to load config from env");
    cleanup_env_vars();

    let api = HttpIntakeApi::from_config(&config.api).unwrap();
    assert_eq!(
        api.client().context().clinic_id(),
        Some(&ClinicId::new("clinic-9").unwrap())
    );
}
