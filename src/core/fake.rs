//! In-memory `IntakeApi` used by the core unit tests

use crate::adapters::api::IntakeApi;
use crate::domain::{
    ApiError, ClinicContext, Created, DentalHistory, DentalHistoryAttributes, DentalHistoryId,
    MedicalHistory, MedicalHistoryAttributes, MedicalHistoryId, PaginationMeta, Patient,
    PatientAttributes, PatientId, PatientSearchCriteria, Result, SearchResult,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub(crate) struct FakeApi {
    context: ClinicContext,
    calls: AtomicUsize,
    failure: Mutex<Option<(u16, String)>>,
    patients: Vec<Patient>,
    pub(crate) searches: Mutex<Vec<PatientSearchCriteria>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::with_patients(Vec::new())
    }

    pub(crate) fn with_patients(patients: Vec<Patient>) -> Self {
        Self {
            context: ClinicContext::anonymous(),
            calls: AtomicUsize::new(0),
            failure: Mutex::new(None),
            patients,
            searches: Mutex::new(Vec::new()),
        }
    }

    /// Makes every following call fail with the given status and body
    pub(crate) fn fail_with(&self, status: u16, body: &str) {
        *self.failure.lock().unwrap() = Some((status, body.to_string()));
    }

    pub(crate) fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.lock().unwrap().clone() {
            Some((status, body)) => Err(ApiError::Http { status, body }.into()),
            None => Ok(()),
        }
    }
}

pub(crate) fn patient(id: u64, first: &str, last: &str) -> Patient {
    Patient {
        id: PatientId::new(id).unwrap(),
        attributes: PatientAttributes {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..Default::default()
        },
    }
}

#[async_trait]
impl IntakeApi for FakeApi {
    fn clinic_context(&self) -> &ClinicContext {
        &self.context
    }

    async fn search_patients(
        &self,
        criteria: &PatientSearchCriteria,
    ) -> Result<SearchResult<Patient>> {
        self.searches.lock().unwrap().push(criteria.clone());
        self.record()?;

        let size = criteria.page_size as usize;
        let start = (criteria.page as usize - 1) * size;
        let items = self.patients.iter().skip(start).take(size).cloned().collect();
        let total = self.patients.len() as u64;
        Ok(SearchResult {
            items,
            pagination: PaginationMeta {
                page: criteria.page,
                page_size: criteria.page_size,
                total_count: total,
                total_pages: (total.div_ceil(criteria.page_size as u64) as u32).max(1),
            },
        })
    }

    async fn create_patient(&self, attributes: &PatientAttributes) -> Result<Created<Patient>> {
        self.record()?;
        Ok(Created {
            entity: Patient {
                id: PatientId::new(12).unwrap(),
                attributes: attributes.clone(),
            },
            message: "Patient created".to_string(),
        })
    }

    async fn create_dental_history(
        &self,
        attributes: &DentalHistoryAttributes,
    ) -> Result<Created<DentalHistory>> {
        self.record()?;
        Ok(Created {
            entity: DentalHistory {
                id: DentalHistoryId::new(7).unwrap(),
                attributes: attributes.clone(),
            },
            message: "Dental history created".to_string(),
        })
    }

    async fn create_medical_history(
        &self,
        attributes: &MedicalHistoryAttributes,
    ) -> Result<Created<MedicalHistory>> {
        self.record()?;
        Ok(Created {
            entity: MedicalHistory {
                id: MedicalHistoryId::new(9).unwrap(),
                attributes: attributes.clone(),
            },
            message: "Medical history created".to_string(),
        })
    }
}
