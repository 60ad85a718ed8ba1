//! Domain models and types for the intake client.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ClinicId`], [`PatientId`], [`DentalHistoryId`], [`MedicalHistoryId`])
//! - **Records** ([`Patient`], [`DentalHistory`], [`MedicalHistory`])
//! - **The response envelope** ([`ApiResponse`], [`PaginationMeta`])
//! - **The clinic scope** ([`ClinicContext`])
//! - **Error types** ([`IntakeError`], [`ApiError`], [`ValidationErrors`])
//!
//! # Type Safety
//!
//! Record identifiers are distinct newtypes, so a dental history id cannot be
//! handed to a step that expects a patient id:
//!
//! ```rust
//! use clinic_intake::domain::{DentalHistoryId, PatientId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let patient_id = PatientId::new(12)?;
//! let dental_history_id = DentalHistoryId::new(40)?;
//!
//! // let wrong: PatientId = dental_history_id;  // Compile error!
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod dental_history;
pub mod envelope;
pub mod errors;
pub mod ids;
pub mod medical_history;
mod nullable;
pub mod patient;
pub mod result;
pub mod tenant;

// Re-export commonly used types for convenience
pub use dental_history::{DentalHistory, DentalHistoryAttributes};
pub use envelope::{ApiResponse, Created, PaginationMeta, ResponseMeta, SearchResult};
pub use errors::{ApiError, FieldError, IntakeError, ValidationErrors};
pub use ids::{ClinicId, DentalHistoryId, MedicalHistoryId, PatientId};
pub use medical_history::{MedicalHistory, MedicalHistoryAttributes};
pub use patient::{Patient, PatientAttributes, PatientSearchCriteria, DEFAULT_PAGE_SIZE};
pub use result::Result;
pub use tenant::{ClinicContext, CLINIC_ID_HEADER};
