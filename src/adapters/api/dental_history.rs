//! Dental history service

use super::client::ApiClient;
use crate::domain::{
    ApiResponse, Created, DentalHistory, DentalHistoryAttributes, PatientId, Result,
};

/// Service for the `/dental_history` resource
#[derive(Debug, Clone)]
pub struct DentalHistoryService {
    client: ApiClient,
}

impl DentalHistoryService {
    /// Creates the service on top of a shared client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /dental_history/{patientId}`
    pub async fn search(&self, patient_id: PatientId) -> Result<Vec<DentalHistory>> {
        let url = self.client.endpoint(&format!("dental_history/{patient_id}"));
        let response: ApiResponse<Vec<DentalHistory>> = self.client.get(&url).await?;

        tracing::debug!(
            patient_id = %patient_id,
            count = response.data.len(),
            "Dental histories fetched"
        );
        Ok(response.data)
    }

    /// `POST /dental_history`
    pub async fn create(
        &self,
        attributes: &DentalHistoryAttributes,
    ) -> Result<Created<DentalHistory>> {
        let url = self.client.endpoint("dental_history");
        let response: ApiResponse<Vec<DentalHistory>> =
            self.client.post_json(&url, attributes).await?;
        let created = response.into_created()?;

        tracing::info!(
            dental_history_id = %created.entity.id,
            patient_id = %created.entity.attributes.patient_id,
            "Dental history created"
        );
        Ok(created)
    }
}
