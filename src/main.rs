// Clinic Intake - Dental Clinic Intake Client
// Copyright (c) 2026 Clinic Intake Contributors
// Licensed under the MIT License

use clap::Parser;
use clinic_intake::cli::commands::logging_settings;
use clinic_intake::cli::{Cli, Commands};
use clinic_intake::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let (log_level, logging_config) =
        logging_settings(&cli.global_options(), cli.log_level.as_deref());
    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Clinic Intake - Dental Clinic Intake Client"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let options = cli.global_options();
    match &cli.command {
        Commands::Search(args) => args.execute(&options).await,
        Commands::CreatePatient(args) => args.execute(&options).await,
        Commands::DentalHistory(command) => command.execute(&options).await,
        Commands::MedicalHistory(command) => command.execute(&options).await,
        Commands::Intake(args) => args.execute(&options).await,
        Commands::ValidateConfig(args) => args.execute(&options).await,
        Commands::Init(args) => args.execute().await,
    }
}
