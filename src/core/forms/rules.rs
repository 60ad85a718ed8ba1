//! Field-level checks shared by the intake forms
//!
//! Each check records a message on failure and returns the normalized value,
//! so a form can collect every failing field in one pass.

use crate::domain::ValidationErrors;
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Trimmed value, recording `message` when it is blank
pub(crate) fn required(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    message: &str,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, message);
    }
    trimmed.to_string()
}

/// Trimmed value, `""` when blank
pub(crate) fn optional(value: &str) -> String {
    value.trim().to_string()
}

/// Required date normalized to `YYYY-MM-DD`
///
/// Accepts a plain date or an RFC 3339 timestamp.
pub(crate) fn required_date(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    message: &str,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, message);
        return String::new();
    }

    match parse_date(trimmed) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => {
            errors.push(field, "Must be a valid date (YYYY-MM-DD)");
            trimmed.to_string()
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Optional email; when present it must look like an address
pub(crate) fn optional_email(errors: &mut ValidationErrors, field: &str, value: &str) -> String {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let pattern = EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());
    let valid = pattern.as_ref().is_some_and(|re| re.is_match(trimmed));
    if !valid {
        errors.push(field, "Invalid email address");
    }
    trimmed.to_string()
}

/// Identifier that must be at least 1
pub(crate) fn required_id(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<u64>,
    message: &str,
) -> u64 {
    match value {
        Some(id) if id >= 1 => id,
        _ => {
            errors.push(field, message);
            0
        }
    }
}

/// Structured data entered as JSON text; blank means `null`
pub(crate) fn optional_json(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
) -> Option<serde_json::Value> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str(trimmed) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            errors.push(field, format!("Must be valid JSON: {e}"));
            None
        }
    }
}
