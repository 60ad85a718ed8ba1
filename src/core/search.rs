//! Patient search view state

use crate::adapters::api::IntakeApi;
use crate::domain::{
    IntakeError, PaginationMeta, Patient, PatientSearchCriteria, Result, ValidationErrors,
    DEFAULT_PAGE_SIZE,
};
use std::sync::Arc;

/// Name search over patients with page navigation
///
/// Results and pagination are replaced wholesale by each response; a failed
/// search clears the results, resets the pagination and keeps the error
/// message.
pub struct PatientSearch {
    api: Arc<dyn IntakeApi>,
    criteria: PatientSearchCriteria,
    items: Vec<Patient>,
    pagination: PaginationMeta,
    error: Option<String>,
}

impl PatientSearch {
    pub fn new(api: Arc<dyn IntakeApi>) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(api: Arc<dyn IntakeApi>, page_size: u32) -> Self {
        Self {
            api,
            criteria: PatientSearchCriteria::by_name("", "").with_page_size(page_size),
            items: Vec::new(),
            pagination: PaginationMeta::initial(page_size),
            error: None,
        }
    }

    /// Updates the name fragments
    pub fn set_criteria(&mut self, first_name: impl Into<String>, last_name: impl Into<String>) {
        self.criteria.first_name = first_name.into();
        self.criteria.last_name = last_name.into();
    }

    /// At least one name fragment must be filled in
    pub fn can_search(&self) -> bool {
        !self.criteria.is_blank()
    }

    pub fn criteria(&self) -> &PatientSearchCriteria {
        &self.criteria
    }

    pub fn items(&self) -> &[Patient] {
        &self.items
    }

    pub fn pagination(&self) -> &PaginationMeta {
        &self.pagination
    }

    /// Error from the last failed search
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Runs a new search from the first page
    ///
    /// # Errors
    ///
    /// Returns a validation error without calling the API when both names
    /// are blank, otherwise the API error.
    pub async fn search(&mut self) -> Result<()> {
        self.run(1).await
    }

    /// Runs a new search starting at `page`
    ///
    /// The page count of a new search is unknown until it returns, so only
    /// the lower bound is checked.
    pub async fn search_page(&mut self, page: u32) -> Result<()> {
        self.run(page.max(1)).await
    }

    /// Fetches a specific page of the current search
    pub async fn go_to_page(&mut self, page: u32) -> Result<()> {
        if page == 0 || page > self.pagination.total_pages.max(1) {
            return Err(IntakeError::Other(format!(
                "Page {page} is out of range (1-{})",
                self.pagination.total_pages.max(1)
            )));
        }
        self.run(page).await
    }

    /// Fetches the next page; does nothing on the last page
    pub async fn next_page(&mut self) -> Result<bool> {
        if !self.pagination.has_next() {
            return Ok(false);
        }
        self.run(self.pagination.page + 1).await?;
        Ok(true)
    }

    /// Fetches the previous page; does nothing on the first page
    pub async fn previous_page(&mut self) -> Result<bool> {
        if !self.pagination.has_previous() {
            return Ok(false);
        }
        self.run(self.pagination.page - 1).await?;
        Ok(true)
    }

    async fn run(&mut self, page: u32) -> Result<()> {
        if !self.can_search() {
            let mut errors = ValidationErrors::new();
            errors.push("name", "Enter a first or last name to search");
            return Err(errors.into());
        }

        self.criteria.page = page;
        match self.api.search_patients(&self.criteria).await {
            Ok(result) => {
                self.items = result.items;
                self.pagination = result.pagination;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Patient search failed");
                self.items.clear();
                self.pagination = PaginationMeta::initial(self.criteria.page_size);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
