//! Create patient command implementation

use super::{build_api, read_json_file, report_error, GlobalOptions};
use crate::adapters::api::IntakeApi;
use crate::core::forms::{IntakeForm, PatientForm};
use crate::domain::IntakeError;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the create-patient command
#[derive(Args, Debug)]
pub struct CreatePatientArgs {
    /// JSON file with the new patient form fields
    #[arg(short, long)]
    pub file: PathBuf,
}

impl CreatePatientArgs {
    /// Execute the create-patient command
    pub async fn execute(&self, options: &GlobalOptions) -> anyhow::Result<i32> {
        let form: PatientForm = match read_json_file(&self.file) {
            Ok(form) => form,
            Err(e) => return Ok(report_error(&e)),
        };

        let (_, api) = match build_api(options) {
            Ok(built) => built,
            Err(e) => return Ok(report_error(&e)),
        };

        let attributes = match form.validate(api.clinic_context()) {
            Ok(attributes) => attributes,
            Err(errors) => return Ok(report_error(&IntakeError::from(errors))),
        };

        match api.create_patient(&attributes).await {
            Ok(created) => {
                println!("✅ {}", created.message);
                println!(
                    "   Patient #{}: {}",
                    created.entity.id,
                    created.entity.full_name()
                );
                Ok(0)
            }
            Err(e) => Ok(report_error(&e)),
        }
    }
}
