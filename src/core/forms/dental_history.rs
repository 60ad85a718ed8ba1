//! Dental history form

use super::rules::{required, required_date, required_id};
use super::IntakeForm;
use crate::domain::{ClinicContext, DentalHistoryAttributes, Patient, PatientId, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Raw input of the dental history form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DentalHistoryForm {
    pub clinic_id: String,
    pub patient_id: Option<u64>,
    pub last_name: String,
    pub first_name: String,
    pub last_visit: String,
}

impl DentalHistoryForm {
    /// Form prefilled with the patient's identifier and names
    pub fn for_patient(patient: &Patient) -> Self {
        Self {
            clinic_id: patient.attributes.clinic_id.clone(),
            patient_id: Some(patient.id.value()),
            last_name: patient.attributes.last_name.clone(),
            first_name: patient.attributes.first_name.clone(),
            last_visit: String::new(),
        }
    }

    /// Sets the patient the history belongs to
    pub fn with_patient_id(mut self, patient_id: PatientId) -> Self {
        self.patient_id = Some(patient_id.value());
        self
    }
}

impl IntakeForm for DentalHistoryForm {
    type Attributes = DentalHistoryAttributes;

    fn validate(
        &self,
        context: &ClinicContext,
    ) -> Result<DentalHistoryAttributes, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let last_name = required(&mut errors, "last_name", &self.last_name, "Last name is required");
        let first_name = required(
            &mut errors,
            "first_name",
            &self.first_name,
            "First name is required",
        );
        let patient_id = required_id(
            &mut errors,
            "patient_id",
            self.patient_id,
            "Patient ID is required",
        );
        let last_visit = required_date(
            &mut errors,
            "last_visit",
            &self.last_visit,
            "Last visit date is required",
        );

        // required_id already recorded a zero id
        let Ok(patient_id) = PatientId::new(patient_id) else {
            return Err(errors);
        };

        errors.into_result(DentalHistoryAttributes {
            clinic_id: super::resolve_clinic_id(&self.clinic_id, context),
            patient_id,
            last_name,
            first_name,
            last_visit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PatientAttributes;

    fn complete_form() -> DentalHistoryForm {
        DentalHistoryForm {
            clinic_id: String::new(),
            patient_id: Some(12),
            last_name: "Cruz".to_string(),
            first_name: "Ana".to_string(),
            last_visit: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_complete_form_validates() {
        let attrs = complete_form()
            .validate(&ClinicContext::anonymous())
            .unwrap();
        assert_eq!(attrs.patient_id.value(), 12);
        assert_eq!(attrs.last_visit, "2024-01-01");
    }

    #[test]
    fn test_missing_patient_id() {
        let mut form = complete_form();
        form.patient_id = None;
        form.last_visit = String::new();

        let errors = form.validate(&ClinicContext::anonymous()).unwrap_err();
        assert_eq!(errors.for_field("patient_id"), Some("Patient ID is required"));
        assert_eq!(
            errors.for_field("last_visit"),
            Some("Last visit date is required")
        );
    }

    #[test]
    fn test_for_patient_prefills() {
        let patient = Patient {
            id: PatientId::new(3).unwrap(),
            attributes: PatientAttributes {
                first_name: "Ana".to_string(),
                last_name: "Cruz".to_string(),
                ..Default::default()
            },
        };
        let form = DentalHistoryForm::for_patient(&patient);
        assert_eq!(form.patient_id, Some(3));
        assert_eq!(form.first_name, "Ana");
        assert!(form.last_visit.is_empty());
    }
}
