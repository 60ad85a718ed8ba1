//! External system integrations.
//!
//! - [`api`] - the clinic intake REST API (request client and domain services)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with mock implementations. The workflow layer depends on the
//! [`api::IntakeApi`] trait rather than on HTTP directly.
//!
//! ```rust,no_run
//! use clinic_intake::adapters::api::HttpIntakeApi;
//! use clinic_intake::config::ApiConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig {
//!     base_url: "https://intake.example.com/api".to_string(),
//!     clinic_id: Some("3f2504e0-4f89-11d3-9a0c-0305e82c3301".to_string()),
//! };
//!
//! let api = HttpIntakeApi::from_config(&config)?;
//! # Ok(())
//! # }
//! ```

pub mod api;
