//! Patient service
//!
//! Wraps the `/patient` resource: name search with pagination and creation.

use super::client::ApiClient;
use crate::domain::{
    ApiResponse, Created, Patient, PatientAttributes, PatientSearchCriteria, Result, SearchResult,
};

/// Service for the `/patient` resource
#[derive(Debug, Clone)]
pub struct PatientService {
    client: ApiClient,
}

impl PatientService {
    /// Creates the service on top of a shared client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /patient/search?firstname=&lastname=&page=&page_size=`
    ///
    /// Unwraps `{ data, meta: { pagination } }` into a [`SearchResult`].
    pub async fn search(&self, criteria: &PatientSearchCriteria) -> Result<SearchResult<Patient>> {
        let url = self
            .client
            .endpoint_with_query("patient/search", &criteria.query_pairs())?;

        let response: ApiResponse<Vec<Patient>> = self.client.get(&url).await?;
        let result = response.into_search_result()?;

        tracing::debug!(
            page = result.pagination.page,
            total_count = result.pagination.total_count,
            returned = result.items.len(),
            "Patient search completed"
        );

        Ok(result)
    }

    /// `POST /patient`
    ///
    /// Returns the first record of `data` and the server message.
    pub async fn create(&self, attributes: &PatientAttributes) -> Result<Created<Patient>> {
        let url = self.client.endpoint("patient");
        let response: ApiResponse<Vec<Patient>> = self.client.post_json(&url, attributes).await?;
        let created = response.into_created()?;

        tracing::info!(patient_id = %created.entity.id, "Patient created");
        Ok(created)
    }
}
