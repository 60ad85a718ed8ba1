//! Intake API trait definition
//!
//! The workflow and the search view talk to the remote service through this
//! trait, so they can run against the HTTP implementation or an in-memory
//! double in tests.

use crate::domain::{
    ClinicContext, Created, DentalHistory, DentalHistoryAttributes, MedicalHistory,
    MedicalHistoryAttributes, Patient, PatientAttributes, PatientSearchCriteria, Result,
    SearchResult,
};
use async_trait::async_trait;

/// Operations the intake workflow and patient search need from the API
///
/// # Example
///
/// ```no_run
/// use clinic_intake::adapters::api::{HttpIntakeApi, IntakeApi};
/// use clinic_intake::domain::{ClinicContext, PatientSearchCriteria};
///
/// # async fn example() -> clinic_intake::domain::Result<()> {
/// let api = HttpIntakeApi::new("https://api.example.com", ClinicContext::anonymous())?;
/// let page = api
///     .search_patients(&PatientSearchCriteria::by_name("Ana", ""))
///     .await?;
/// println!("{} of {} patients", page.items.len(), page.pagination.total_count);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait IntakeApi: Send + Sync {
    /// Clinic scope applied to every call
    fn clinic_context(&self) -> &ClinicContext;

    /// Search patients by name fragments with pagination
    async fn search_patients(
        &self,
        criteria: &PatientSearchCriteria,
    ) -> Result<SearchResult<Patient>>;

    /// Create a patient
    async fn create_patient(&self, attributes: &PatientAttributes) -> Result<Created<Patient>>;

    /// Create a dental history for an existing patient
    async fn create_dental_history(
        &self,
        attributes: &DentalHistoryAttributes,
    ) -> Result<Created<DentalHistory>>;

    /// Create a medical history for an existing patient
    async fn create_medical_history(
        &self,
        attributes: &MedicalHistoryAttributes,
    ) -> Result<Created<MedicalHistory>>;
}
