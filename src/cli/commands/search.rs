//! Search command implementation
//!
//! This module implements the `search` command, a paged name search over
//! the clinic's patients.

use super::{build_api, report_error, GlobalOptions};
use crate::core::search::PatientSearch;
use crate::domain::Patient;
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// First name fragment
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Last name fragment
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Results per page; defaults to `search.page_size`
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    /// Execute the search command
    pub async fn execute(&self, options: &GlobalOptions) -> anyhow::Result<i32> {
        let (config, api) = match build_api(options) {
            Ok(built) => built,
            Err(e) => return Ok(report_error(&e)),
        };

        let page_size = self.page_size.unwrap_or(config.search.page_size);
        let mut search = PatientSearch::with_page_size(Arc::new(api), page_size);
        search.set_criteria(&self.first_name, &self.last_name);

        tracing::info!(
            first_name = %self.first_name,
            last_name = %self.last_name,
            page = self.page,
            page_size,
            "Searching patients"
        );

        if let Err(e) = search.search_page(self.page).await {
            return Ok(report_error(&e));
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(search.items())?);
            return Ok(0);
        }

        let pagination = search.pagination();
        if search.items().is_empty() {
            println!("No patients found.");
        } else {
            print_table(search.items());
        }
        println!();
        println!(
            "Page {} of {} ({} patient(s) total)",
            pagination.page, pagination.total_pages, pagination.total_count
        );
        Ok(0)
    }
}

fn print_table(patients: &[Patient]) {
    println!(
        "{:<8} {:<32} {:<12} {:<10} {:<20}",
        "ID", "Name", "Birthdate", "Gender", "City/Town"
    );
    println!("{}", "-".repeat(86));

    for patient in patients {
        println!(
            "{:<8} {:<32} {:<12} {:<10} {:<20}",
            patient.id,
            patient.full_name(),
            patient.attributes.birthdate,
            patient.attributes.gender,
            patient.attributes.city_town
        );
    }
}
