//! HTTP implementation of [`IntakeApi`]

use super::client::ApiClient;
use super::dental_history::DentalHistoryService;
use super::medical_history::MedicalHistoryService;
use super::patient::PatientService;
use super::IntakeApi;
use crate::config::ApiConfig;
use crate::domain::{
    ClinicContext, Created, DentalHistory, DentalHistoryAttributes, MedicalHistory,
    MedicalHistoryAttributes, Patient, PatientAttributes, PatientSearchCriteria, Result,
    SearchResult,
};
use async_trait::async_trait;

/// The three domain services sharing one [`ApiClient`]
#[derive(Debug, Clone)]
pub struct HttpIntakeApi {
    client: ApiClient,
    patients: PatientService,
    dental_histories: DentalHistoryService,
    medical_histories: MedicalHistoryService,
}

impl HttpIntakeApi {
    /// Creates the services for `base_url` scoped to `context`
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the base URL is missing or invalid.
    pub fn new(base_url: impl Into<String>, context: ClinicContext) -> Result<Self> {
        Ok(Self::from_client(ApiClient::new(base_url, context)?))
    }

    /// Creates the services from the `[api]` configuration section
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Ok(Self::from_client(ApiClient::from_config(config)?))
    }

    /// Creates the services on top of an existing client
    pub fn from_client(client: ApiClient) -> Self {
        Self {
            patients: PatientService::new(client.clone()),
            dental_histories: DentalHistoryService::new(client.clone()),
            medical_histories: MedicalHistoryService::new(client.clone()),
            client,
        }
    }

    /// The shared request client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Patient service
    pub fn patients(&self) -> &PatientService {
        &self.patients
    }

    /// Dental history service
    pub fn dental_histories(&self) -> &DentalHistoryService {
        &self.dental_histories
    }

    /// Medical history service
    pub fn medical_histories(&self) -> &MedicalHistoryService {
        &self.medical_histories
    }
}

#[async_trait]
impl IntakeApi for HttpIntakeApi {
    fn clinic_context(&self) -> &ClinicContext {
        self.client.context()
    }

    async fn search_patients(
        &self,
        criteria: &PatientSearchCriteria,
    ) -> Result<SearchResult<Patient>> {
        self.patients.search(criteria).await
    }

    async fn create_patient(&self, attributes: &PatientAttributes) -> Result<Created<Patient>> {
        self.patients.create(attributes).await
    }

    async fn create_dental_history(
        &self,
        attributes: &DentalHistoryAttributes,
    ) -> Result<Created<DentalHistory>> {
        self.dental_histories.create(attributes).await
    }

    async fn create_medical_history(
        &self,
        attributes: &MedicalHistoryAttributes,
    ) -> Result<Created<MedicalHistory>> {
        self.medical_histories.create(attributes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClinicId, IntakeError};

    #[test]
    fn test_from_config_without_base_url_fails() {
        let config = ApiConfig::default();
        let result = HttpIntakeApi::from_config(&config);
        assert!(matches!(result, Err(IntakeError::Configuration(_))));
    }

    #[test]
    fn test_from_config_carries_clinic_context() {
        let config = ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            clinic_id: Some("clinic-7".to_string()),
        };
        let api = HttpIntakeApi::from_config(&config).unwrap();
        assert_eq!(
            api.clinic_context().clinic_id(),
            Some(&ClinicId::new("clinic-7").unwrap())
        );
        assert_eq!(api.client().base_url(), "http://localhost:3000");
    }
}
