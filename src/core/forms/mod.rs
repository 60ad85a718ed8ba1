//! Intake forms
//!
//! Each form holds raw user input and turns it into service attributes, or
//! into the full list of field errors when required input is missing.

pub mod dental_history;
pub mod medical_history;
pub mod patient;
pub(crate) mod rules;

pub use dental_history::DentalHistoryForm;
pub use medical_history::MedicalHistoryForm;
pub use patient::PatientForm;

use crate::domain::{ClinicContext, ValidationErrors};

/// A form that validates into request attributes
pub trait IntakeForm {
    /// The attributes sent to the service on success
    type Attributes;

    /// Checks required fields and normalizes values
    ///
    /// # Errors
    ///
    /// Returns every failing field, not just the first.
    fn validate(&self, context: &ClinicContext) -> Result<Self::Attributes, ValidationErrors>;
}

/// Clinic id typed on the form, else the one from the context
pub(crate) fn resolve_clinic_id(form_value: &str, context: &ClinicContext) -> String {
    let trimmed = form_value.trim();
    if trimmed.is_empty() {
        context.clinic_id_or_empty()
    } else {
        trimmed.to_string()
    }
}

/// Submission state of a single form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Accepting input; carries the last submission error, if any
    Editing {
        error: Option<String>,
        field_errors: ValidationErrors,
    },
    /// A request is in flight
    Submitting,
    /// The server accepted the form
    Succeeded { message: String },
}

impl Default for FormState {
    fn default() -> Self {
        Self::editing()
    }
}

impl FormState {
    /// Clean editing state
    pub fn editing() -> Self {
        FormState::Editing {
            error: None,
            field_errors: ValidationErrors::new(),
        }
    }

    /// Editing again after a failed submission
    pub fn failed(error: impl Into<String>) -> Self {
        FormState::Editing {
            error: Some(error.into()),
            field_errors: ValidationErrors::new(),
        }
    }

    /// Editing with per-field errors from validation
    pub fn invalid(field_errors: ValidationErrors) -> Self {
        FormState::Editing {
            error: None,
            field_errors,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormState::Submitting)
    }

    /// Last submission error
    pub fn error(&self) -> Option<&str> {
        match self {
            FormState::Editing { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Field errors from the last validation
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            FormState::Editing { field_errors, .. } if !field_errors.is_empty() => {
                Some(field_errors)
            }
            _ => None,
        }
    }

    /// Server message of the last successful submission
    pub fn success_message(&self) -> Option<&str> {
        match self {
            FormState::Succeeded { message } => Some(message),
            _ => None,
        }
    }
}
