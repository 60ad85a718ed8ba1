//! Dental history commands

use super::{build_api, read_json_file, report_error, GlobalOptions};
use crate::adapters::api::IntakeApi;
use crate::core::forms::{DentalHistoryForm, IntakeForm};
use crate::domain::{IntakeError, PatientId};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Dental history subcommands
#[derive(Subcommand, Debug)]
pub enum DentalHistoryCommand {
    /// List the dental histories of a patient
    List(ListArgs),

    /// Record a dental history from a JSON file
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Patient identifier
    pub patient_id: PatientId,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// JSON file with the dental history form fields
    #[arg(short, long)]
    pub file: PathBuf,
}

impl DentalHistoryCommand {
    pub async fn execute(&self, options: &GlobalOptions) -> anyhow::Result<i32> {
        match self {
            DentalHistoryCommand::List(args) => args.execute(options).await,
            DentalHistoryCommand::Create(args) => args.execute(options).await,
        }
    }
}

impl ListArgs {
    async fn execute(&self, options: &GlobalOptions) -> anyhow::Result<i32> {
        let (_, api) = match build_api(options) {
            Ok(built) => built,
            Err(e) => return Ok(report_error(&e)),
        };

        let histories = match api.dental_histories().search(self.patient_id).await {
            Ok(histories) => histories,
            Err(e) => return Ok(report_error(&e)),
        };

        if histories.is_empty() {
            println!("No dental history found for patient #{}.", self.patient_id);
            return Ok(0);
        }

        println!("{:<8} {:<32} {:<12}", "ID", "Name", "Last visit");
        println!("{}", "-".repeat(54));
        for history in &histories {
            let attrs = &history.attributes;
            println!(
                "{:<8} {:<32} {:<12}",
                history.id,
                format!("{} {}", attrs.first_name, attrs.last_name),
                attrs.last_visit
            );
        }
        Ok(0)
    }
}

impl CreateArgs {
    async fn execute(&self, options: &GlobalOptions) -> anyhow::Result<i32> {
        let form: DentalHistoryForm = match read_json_file(&self.file) {
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

        match api.create_dental_history(&attributes).await {
            Ok(created) => {
                println!("✅ {}", created.message);
                println!(
                    "   Dental history #{} for patient #{}",
                    created.entity.id, created.entity.attributes.patient_id
                );
                Ok(0)
            }
            Err(e) => Ok(report_error(&e)),
        }
    }
}
