// Clinic Intake - Dental Clinic Intake Client
// Copyright (c) 2026 Clinic Intake Contributors
// Licensed under the MIT License

//! # Clinic Intake - Dental Clinic Intake Client
//!
//! A typed client for a dental clinic's patient intake REST API, with a CLI
//! on top.
//!
//! ## Overview
//!
//! This library provides:
//! - **Searching** patients by name with pagination
//! - **Registering** patients and recording their dental and medical history
//! - **Validating** intake forms before anything is sent
//! - **Scoping** every request to a clinic through the `X-Clinic-Id` header
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Intake forms, the intake workflow and the search view
//! - [`adapters`] - The HTTP request client and domain services
//! - [`domain`] - Records, identifiers, the response envelope and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clinic_intake::adapters::api::{HttpIntakeApi, IntakeApi};
//! use clinic_intake::config::load_config;
//! use clinic_intake::domain::PatientSearchCriteria;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("intake.toml")?;
//!     let api = HttpIntakeApi::from_config(&config.api)?;
//!
//!     let criteria = PatientSearchCriteria::by_name("Ana", "Cruz");
//!     let page = api.search_patients(&criteria).await?;
//!
//!     for patient in &page.items {
//!         println!("#{} {}", patient.id, patient.full_name());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Intake Workflow
//!
//! The patient is created first; the identifier the server assigns is carried
//! into the dental and medical history forms by
//! [`IntakeWorkflow`](core::workflow::IntakeWorkflow). Submitting a step out of
//! order fails without a request.
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`], whose error is
//! [`domain::IntakeError`]:
//!
//! ```rust,no_run
//! use clinic_intake::domain::IntakeError;
//!
//! fn example() -> Result<(), IntakeError> {
//!     let config = clinic_intake::config::load_from_env()?;
//!     println!("{}", config.api.base_url);
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Structured logging uses the `tracing` crate; see [`logging::init_logging`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
