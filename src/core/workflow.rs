//! Patient intake workflow
//!
//! A new patient is registered first, then the dental history and the
//! medical history are recorded against the identifier the server assigned.
//! The workflow carries that identifier between steps so every later form is
//! tied to the right patient.
//!
//! # Example
//!
//! ```rust,no_run
//! use clinic_intake::adapters::api::HttpIntakeApi;
//! use clinic_intake::core::forms::{DentalHistoryForm, MedicalHistoryForm, PatientForm};
//! use clinic_intake::core::workflow::IntakeWorkflow;
//! use clinic_intake::domain::ClinicContext;
//! use std::sync::Arc;
//!
//! # async fn example() -> clinic_intake::domain::Result<()> {
//! let api = Arc::new(HttpIntakeApi::new("https://api.example.com", ClinicContext::anonymous())?);
//! let mut workflow = IntakeWorkflow::new(api);
//!
//! let patient_form: PatientForm = serde_json::from_str(r#"{"first_name": "Ana"}"#)?;
//! workflow.submit_patient(&patient_form).await?;
//! workflow.submit_dental_history(&workflow.dental_history_form()).await?;
//! workflow.submit_medical_history(&workflow.medical_history_form()).await?;
//! # Ok(())
//! # }
//! ```

use super::forms::{DentalHistoryForm, FormState, IntakeForm, MedicalHistoryForm, PatientForm};
use crate::adapters::api::IntakeApi;
use crate::domain::{
    Created, DentalHistory, DentalHistoryId, IntakeError, MedicalHistory, MedicalHistoryId,
    Patient, PatientId, Result,
};
use std::fmt;
use std::sync::Arc;

/// Where the intake currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeState {
    /// No patient registered yet
    AwaitingPatient,

    /// Patient created; dental history comes next
    AwaitingDentalHistory { patient_id: PatientId },

    /// Dental history recorded or skipped; medical history comes next
    AwaitingMedicalHistory {
        patient_id: PatientId,
        dental_history_id: Option<DentalHistoryId>,
    },

    /// Every step is done
    Complete {
        patient_id: PatientId,
        dental_history_id: Option<DentalHistoryId>,
        medical_history_id: MedicalHistoryId,
    },
}

impl IntakeState {
    /// The patient carried by this state, if one was created
    pub fn patient_id(&self) -> Option<PatientId> {
        match self {
            IntakeState::AwaitingPatient => None,
            IntakeState::AwaitingDentalHistory { patient_id }
            | IntakeState::AwaitingMedicalHistory { patient_id, .. }
            | IntakeState::Complete { patient_id, .. } => Some(*patient_id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IntakeState::AwaitingPatient => "awaiting_patient",
            IntakeState::AwaitingDentalHistory { .. } => "awaiting_dental_history",
            IntakeState::AwaitingMedicalHistory { .. } => "awaiting_medical_history",
            IntakeState::Complete { .. } => "complete",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, IntakeState::Complete { .. })
    }
}

impl fmt::Display for IntakeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drives the patient, dental history and medical history forms in order
pub struct IntakeWorkflow {
    api: Arc<dyn IntakeApi>,
    state: IntakeState,
    form: FormState,
    patient: Option<Patient>,
}

impl IntakeWorkflow {
    /// Starts a fresh intake
    pub fn new(api: Arc<dyn IntakeApi>) -> Self {
        Self {
            api,
            state: IntakeState::AwaitingPatient,
            form: FormState::default(),
            patient: None,
        }
    }

    /// Continues an intake for a patient that already exists
    pub fn resume_for_patient(api: Arc<dyn IntakeApi>, patient: Patient) -> Self {
        Self {
            api,
            state: IntakeState::AwaitingDentalHistory {
                patient_id: patient.id,
            },
            form: FormState::default(),
            patient: Some(patient),
        }
    }

    pub fn state(&self) -> IntakeState {
        self.state
    }

    /// Submission state of the current form
    pub fn form_state(&self) -> &FormState {
        &self.form
    }

    /// Error message of the last failed submission
    pub fn last_error(&self) -> Option<&str> {
        self.form.error()
    }

    /// The registered patient, once known
    pub fn patient(&self) -> Option<&Patient> {
        self.patient.as_ref()
    }

    /// Dental history form prefilled from the registered patient
    pub fn dental_history_form(&self) -> DentalHistoryForm {
        match &self.patient {
            Some(patient) => DentalHistoryForm::for_patient(patient),
            None => DentalHistoryForm::default(),
        }
    }

    /// Medical history form prefilled from the registered patient
    pub fn medical_history_form(&self) -> MedicalHistoryForm {
        match &self.patient {
            Some(patient) => MedicalHistoryForm::for_patient(patient),
            None => MedicalHistoryForm::default(),
        }
    }

    /// Registers the patient
    ///
    /// # Errors
    ///
    /// `OutOfSequence` unless no patient was created yet, `Validation` when
    /// required fields are missing (no request is sent), or the API error.
    pub async fn submit_patient(&mut self, form: &PatientForm) -> Result<Created<Patient>> {
        if self.state != IntakeState::AwaitingPatient {
            return Err(self.out_of_sequence("patient"));
        }

        let attributes = self.begin(form)?;
        let result = self.api.create_patient(&attributes).await;
        let created = self.settle(result)?;

        crate::log_intake_step!("patient", created.entity.id, created.message);
        self.state = IntakeState::AwaitingDentalHistory {
            patient_id: created.entity.id,
        };
        self.patient = Some(created.entity.clone());
        Ok(created)
    }

    /// Records the dental history for the registered patient
    ///
    /// The patient identifier on the form is replaced by the one carried from
    /// the previous step.
    pub async fn submit_dental_history(
        &mut self,
        form: &DentalHistoryForm,
    ) -> Result<Created<DentalHistory>> {
        let IntakeState::AwaitingDentalHistory { patient_id } = self.state else {
            return Err(self.out_of_sequence("dental history"));
        };

        let form = form.clone().with_patient_id(patient_id);
        let attributes = self.begin(&form)?;
        let result = self.api.create_dental_history(&attributes).await;
        let created = self.settle(result)?;

        crate::log_intake_step!("dental_history", created.entity.id, created.message);
        self.state = IntakeState::AwaitingMedicalHistory {
            patient_id,
            dental_history_id: Some(created.entity.id),
        };
        Ok(created)
    }

    /// Moves on to the medical history without recording a dental history
    pub fn skip_dental_history(&mut self) -> Result<()> {
        let IntakeState::AwaitingDentalHistory { patient_id } = self.state else {
            return Err(self.out_of_sequence("dental history"));
        };

        tracing::info!(patient_id = %patient_id, "Dental history skipped");
        self.state = IntakeState::AwaitingMedicalHistory {
            patient_id,
            dental_history_id: None,
        };
        self.form = FormState::default();
        Ok(())
    }

    /// Records the medical history and completes the intake
    pub async fn submit_medical_history(
        &mut self,
        form: &MedicalHistoryForm,
    ) -> Result<Created<MedicalHistory>> {
        let IntakeState::AwaitingMedicalHistory {
            patient_id,
            dental_history_id,
        } = self.state
        else {
            return Err(self.out_of_sequence("medical history"));
        };

        let form = form.clone().with_patient_id(patient_id);
        let attributes = self.begin(&form)?;
        let result = self.api.create_medical_history(&attributes).await;
        let created = self.settle(result)?;

        crate::log_intake_step!("medical_history", created.entity.id, created.message);
        self.state = IntakeState::Complete {
            patient_id,
            dental_history_id,
            medical_history_id: created.entity.id,
        };
        Ok(created)
    }

    /// Validates the form and marks it as submitting
    fn begin<F: IntakeForm>(&mut self, form: &F) -> Result<F::Attributes> {
        match form.validate(self.api.clinic_context()) {
            Ok(attributes) => {
                self.form = FormState::Submitting;
                Ok(attributes)
            }
            Err(errors) => {
                tracing::debug!(state = %self.state, errors = %errors, "Form validation failed");
                self.form = FormState::invalid(errors.clone());
                Err(IntakeError::Validation(errors))
            }
        }
    }

    /// Records the outcome of a submission on the form state
    fn settle<T>(&mut self, result: Result<Created<T>>) -> Result<Created<T>> {
        match result {
            Ok(created) => {
                self.form = FormState::Succeeded {
                    message: created.message.clone(),
                };
                Ok(created)
            }
            Err(e) => {
                tracing::warn!(state = %self.state, error = %e, "Intake submission failed");
                self.form = FormState::failed(e.to_string());
                Err(e)
            }
        }
    }

    fn out_of_sequence(&self, step: &str) -> IntakeError {
        IntakeError::OutOfSequence(format!(
            "cannot submit the {step} form while the intake is {}",
            self.state
        ))
    }
}
