//! Medical history commands

use super::{build_api, read_json_file, report_error, GlobalOptions};
use crate::adapters::api::IntakeApi;
use crate::core::forms::{IntakeForm, MedicalHistoryForm};
use crate::domain::{IntakeError, MedicalHistory, PatientId};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Medical history subcommands
#[derive(Subcommand, Debug)]
pub enum MedicalHistoryCommand {
    /// List the medical histories of a patient
    List(ListArgs),

    /// Record a medical history from a JSON file
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Patient identifier
    pub patient_id: PatientId,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// JSON file with the medical history form fields
    #[arg(short, long)]
    pub file: PathBuf,
}

impl MedicalHistoryCommand {
    pub async fn execute(&self, options: &GlobalOptions) -> anyhow::Result<i32> {
        match self {
            MedicalHistoryCommand::List(args) => args.execute(options).await,
            MedicalHistoryCommand::Create(args) => args.execute(options).await,
        }
    }
}

impl ListArgs {
    async fn execute(&self, options: &GlobalOptions) -> anyhow::Result<i32> {
        let (_, api) = match build_api(options) {
            Ok(built) => built,
            Err(e) => return Ok(report_error(&e)),
        };

        let histories = match api.medical_histories().search(self.patient_id).await {
            Ok(histories) => histories,
            Err(e) => return Ok(report_error(&e)),
        };

        if histories.is_empty() {
            println!("No medical history found for patient #{}.", self.patient_id);
            return Ok(0);
        }

        for history in &histories {
            print_history(history);
        }
        Ok(0)
    }
}

fn print_history(history: &MedicalHistory) {
    let attrs = &history.attributes;
    let flag = |set: bool| if set { "yes" } else { "no" };
    let text = |value: &str| if value.is_empty() { "-".to_string() } else { value.to_string() };

    println!(
        "Medical history #{} ({} {})",
        history.id, attrs.first_name, attrs.last_name
    );
    println!("  Good health:      {}", flag(attrs.good_health));
    println!("  Tobacco use:      {}", flag(attrs.tobacco_use));
    println!("  Drug use:         {}", flag(attrs.drug_use));
    println!("  Blood type:       {}", text(&attrs.blood_type));
    println!("  Medication:       {}", text(&attrs.medication));
    if let Some(allergy) = &attrs.allergy {
        println!("  Allergy:          {allergy}");
    }
    if let Some(conditions) = &attrs.existing_conditions {
        println!("  Conditions:       {conditions}");
    }
    println!();
}

impl CreateArgs {
    async fn execute(&self, options: &GlobalOptions) -> anyhow::Result<i32> {
        let form: MedicalHistoryForm = match read_json_file(&self.file) {
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

        match api.create_medical_history(&attributes).await {
            Ok(created) => {
                println!("✅ {}", created.message);
                println!(
                    "   Medical history #{} for patient #{}",
                    created.entity.id, created.entity.attributes.patient_id
                );
                Ok(0)
            }
            Err(e) => Ok(report_error(&e)),
        }
    }
}
