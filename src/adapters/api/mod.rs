//! Intake REST API adapter
//!
//! This module provides the request client, the three domain services and
//! the [`IntakeApi`] trait the workflow is written against.

pub mod client;
pub mod dental_history;
pub mod http;
pub mod medical_history;
pub mod patient;
mod r#trait;

pub use client::{ApiClient, RequestOptions};
pub use dental_history::DentalHistoryService;
pub use http::HttpIntakeApi;
pub use medical_history::MedicalHistoryService;
pub use patient::PatientService;
pub use r#trait::IntakeApi;
