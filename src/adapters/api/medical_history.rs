//! Medical history service

use super::client::ApiClient;
use crate::domain::{
    ApiResponse, Created, MedicalHistory, MedicalHistoryAttributes, PatientId, Result,
};

/// Service for the `/medical_history` resource
#[derive(Debug, Clone)]
pub struct MedicalHistoryService {
    client: ApiClient,
}

impl MedicalHistoryService {
    /// Creates the service on top of a shared client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /medical_history/{patientId}`
    pub async fn search(&self, patient_id: PatientId) -> Result<Vec<MedicalHistory>> {
        let url = self
            .client
            .endpoint(&format!("medical_history/{patient_id}"));
        let response: ApiResponse<Vec<MedicalHistory>> = self.client.get(&url).await?;

        tracing::debug!(
            patient_id = %patient_id,
            count = response.data.len(),
            "Medical histories fetched"
        );
        Ok(response.data)
    }

    /// `POST /medical_history`
    pub async fn create(
        &self,
        attributes: &MedicalHistoryAttributes,
    ) -> Result<Created<MedicalHistory>> {
        let url = self.client.endpoint("medical_history");
        let response: ApiResponse<Vec<MedicalHistory>> =
            self.client.post_json(&url, attributes).await?;
        let created = response.into_created()?;

        tracing::info!(
            medical_history_id = %created.entity.id,
            patient_id = %created.entity.attributes.patient_id,
            "Medical history created"
        );
        Ok(created)
    }
}
