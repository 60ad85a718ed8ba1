//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the intake client using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use commands::GlobalOptions;

/// Clinic Intake - dental clinic patient intake client
#[derive(Parser, Debug)]
#[command(name = "clinic-intake")]
#[command(version, about, long_about = None)]
#[command(author = "Clinic Intake Contributors")]
pub struct Cli {
    /// Path to configuration file; settings come from INTAKE_* variables when omitted
    #[arg(short, long, env = "INTAKE_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "INTAKE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Clinic identifier sent with every request
    #[arg(long, env = "INTAKE_CLINIC_ID")]
    pub clinic_id: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Options every command needs
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            config_path: self.config.clone(),
            clinic_id: self.clinic_id.clone(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search patients by name
    Search(commands::search::SearchArgs),

    /// Register a new patient from a JSON file
    CreatePatient(commands::create_patient::CreatePatientArgs),

    /// List or record dental histories
    #[command(subcommand)]
    DentalHistory(commands::dental_history::DentalHistoryCommand),

    /// List or record medical histories
    #[command(subcommand)]
    MedicalHistory(commands::medical_history::MedicalHistoryCommand),

    /// Run the full intake (patient, dental history, medical history)
    Intake(commands::intake::IntakeArgs),

    /// Validate configuration
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
