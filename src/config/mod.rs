//! Configuration management.
//!
//! # Overview
//!
//! Configuration comes from an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `INTAKE_<SECTION>_<KEY>` environment overrides
//! - Default values for everything except the API base URL
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - log level
//! - [`ApiConfig`] - API base URL and clinic identifier
//! - [`SearchConfig`] - patient search page size
//! - [`LoggingConfig`] - rolling file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [api]
//! base_url = "${INTAKE_API_BASE_URL}"
//! clinic_id = "3f2504e0-4f89-11d3-9a0c-0305e82c3301"
//!
//! [search]
//! page_size = 10
//! ```
//!
//! # Base URL
//!
//! The API base URL has no default. Loading fails before any request is
//! attempted when it is missing:
//!
//! ```rust,no_run
//! use clinic_intake::config::load_from_env;
//!
//! # fn example() {
//! match load_from_env() {
//!     Ok(config) => println!("API: {}", config.api.base_url),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_from_env};
pub use schema::{ApiConfig, ApplicationConfig, IntakeConfig, LoggingConfig, SearchConfig};
