//! Logging and observability
//!
//! Structured logging with:
//! - Configurable log levels (`RUST_LOG` overrides the configured level)
//! - Console output on stderr
//! - Optional JSON logs with rotation
//!
//! # Example
//!
//! ```no_run
//! use clinic_intake::logging::init_logging;
//! use clinic_intake::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log an outgoing API request
///
/// # Example
///
/// ```no_run
/// use clinic_intake::log_api_request;
///
/// log_api_request!("GET", "https://api.example.com/patient/search", true);
/// ```
#[macro_export]
macro_rules! log_api_request {
    ($method:expr, $url:expr, $scoped:expr) => {
        tracing::debug!(
            method = %$method,
            url = %$url,
            clinic_scoped = $scoped,
            "Sending API request"
        );
    };
}

/// Log a completed intake workflow step
///
/// # Example
///
/// ```no_run
/// use clinic_intake::log_intake_step;
///
/// log_intake_step!("patient", 42u64, "Patient created");
/// ```
#[macro_export]
macro_rules! log_intake_step {
    ($step:expr, $record_id:expr, $message:expr) => {
        tracing::info!(
            step = $step,
            record_id = %$record_id,
            server_message = %$message,
            "Intake step completed"
        );
    };
}
