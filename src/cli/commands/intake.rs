//! Intake command implementation
//!
//! Runs the whole intake from one JSON document:
//!
//! ```json
//! {
//!   "patient": { "first_name": "Ana", "last_name": "Cruz", "...": "..." },
//!   "dental_history": { "last_visit": "2024-01-01" },
//!   "medical_history": { "good_health": true }
//! }
//! ```
//!
//! The history sections are laid over forms prefilled from the created
//! patient, so names and address only need to be given once.

use super::{build_api, read_json_file, report_error, GlobalOptions};
use crate::core::workflow::IntakeWorkflow;
use crate::domain::{IntakeError, Result};
use clap::Args;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the intake command
#[derive(Args, Debug)]
pub struct IntakeArgs {
    /// JSON intake document
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Input document of the intake command
#[derive(Debug, Deserialize)]
pub struct IntakeDocument {
    pub patient: crate::core::forms::PatientForm,

    /// Skipped when absent
    #[serde(default)]
    pub dental_history: Option<Value>,

    pub medical_history: Value,
}

impl IntakeArgs {
    /// Execute the intake command
    pub async fn execute(&self, options: &GlobalOptions) -> anyhow::Result<i32> {
        let document: IntakeDocument = match read_json_file(&self.file) {
            Ok(document) => document,
            Err(e) => return Ok(report_error(&e)),
        };

        let (_, api) = match build_api(options) {
            Ok(built) => built,
            Err(e) => return Ok(report_error(&e)),
        };

        let mut workflow = IntakeWorkflow::new(Arc::new(api));
        match run(&mut workflow, &document).await {
            Ok(()) => {
                println!();
                println!("✅ Intake complete");
                Ok(0)
            }
            Err(e) => {
                println!("   Stopped at step: {}", workflow.state());
                Ok(report_error(&e))
            }
        }
    }
}

async fn run(workflow: &mut IntakeWorkflow, document: &IntakeDocument) -> Result<()> {
    println!("📝 Registering patient");
    let patient = workflow.submit_patient(&document.patient).await?;
    println!(
        "   ✅ {}: #{} {}",
        patient.message,
        patient.entity.id,
        patient.entity.full_name()
    );

    match &document.dental_history {
        Some(section) => {
            println!("🦷 Recording dental history");
            let form = overlay(workflow.dental_history_form(), section)?;
            let created = workflow.submit_dental_history(&form).await?;
            println!("   ✅ {}: #{}", created.message, created.entity.id);
        }
        None => {
            println!("🦷 No dental history given, skipping");
            workflow.skip_dental_history()?;
        }
    }

    println!("🩺 Recording medical history");
    let form = overlay(workflow.medical_history_form(), &document.medical_history)?;
    let created = workflow.submit_medical_history(&form).await?;
    println!("   ✅ {}: #{}", created.message, created.entity.id);

    Ok(())
}

/// Lays the keys of a JSON object over a prefilled form
fn overlay<F>(prefilled: F, section: &Value) -> Result<F>
where
    F: Serialize + DeserializeOwned,
{
    let Some(overrides) = section.as_object() else {
        return Err(IntakeError::Serialization(
            "intake sections must be JSON objects".to_string(),
        ));
    };

    let mut merged = serde_json::to_value(prefilled)?;
    if let Some(fields) = merged.as_object_mut() {
        for (key, value) in overrides {
            fields.insert(key.clone(), value.clone());
        }
    }
    Ok(serde_json::from_value(merged)?)
}
