//! Core intake logic
//!
//! # Modules
//!
//! - [`forms`] - Form input, field validation and submission state
//! - [`workflow`] - The patient, dental history, medical history sequence
//! - [`search`] - Patient search with page navigation
//!
//! Both the workflow and the search view talk to the service through
//! [`IntakeApi`](crate::adapters::api::IntakeApi), never to HTTP directly.

pub mod forms;
pub mod search;
pub mod workflow;

#[cfg(test)]
pub(crate) mod fake;

pub use forms::{DentalHistoryForm, FormState, IntakeForm, MedicalHistoryForm, PatientForm};
pub use search::PatientSearch;
pub use workflow::{IntakeState, IntakeWorkflow};
