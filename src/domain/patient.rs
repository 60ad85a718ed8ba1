//! Patient domain model

use super::ids::PatientId;
use super::nullable::or_default;
use serde::{Deserialize, Serialize};

/// Patient attributes as sent to and echoed by `POST /patient`
///
/// Every field is a string. Optional fields are sent as `""` when the user
/// left them blank, never omitted. Missing or `null` fields read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientAttributes {
    #[serde(deserialize_with = "or_default")]
    pub clinic_id: String,
    #[serde(deserialize_with = "or_default")]
    pub last_name: String,
    #[serde(deserialize_with = "or_default")]
    pub first_name: String,
    #[serde(deserialize_with = "or_default")]
    pub middle_name: String,
    #[serde(deserialize_with = "or_default")]
    pub birthdate: String,
    #[serde(deserialize_with = "or_default")]
    pub gender: String,
    #[serde(deserialize_with = "or_default")]
    pub nick_name: String,
    #[serde(deserialize_with = "or_default")]
    pub home_phone: String,
    #[serde(deserialize_with = "or_default")]
    pub office_phone: String,
    #[serde(deserialize_with = "or_default")]
    pub mobile_phone: String,
    #[serde(deserialize_with = "or_default")]
    pub email_address: String,
    #[serde(deserialize_with = "or_default")]
    pub fax_number: String,
    #[serde(deserialize_with = "or_default")]
    pub nationality: String,
    #[serde(deserialize_with = "or_default")]
    pub street_address: String,
    #[serde(deserialize_with = "or_default")]
    pub city_town: String,
    #[serde(deserialize_with = "or_default")]
    pub province: String,
    #[serde(deserialize_with = "or_default")]
    pub zip_code: String,
    #[serde(deserialize_with = "or_default")]
    pub occupation: String,
    #[serde(deserialize_with = "or_default")]
    pub dental_insurance: String,
    #[serde(deserialize_with = "or_default")]
    pub guardian_name: String,
    #[serde(deserialize_with = "or_default")]
    pub guardian_occupation: String,
    #[serde(deserialize_with = "or_default")]
    pub referrer: String,
    #[serde(deserialize_with = "or_default")]
    pub consultation_reason: String,
}

/// A patient record owned by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Server-assigned identifier
    pub id: PatientId,

    /// Patient attributes
    pub attributes: PatientAttributes,
}

impl Patient {
    /// "First Last" display name
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.attributes.first_name.trim(),
            self.attributes.last_name.trim()
        )
        .trim()
        .to_string()
    }
}

/// Default page size used by the search view
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Criteria for `GET /patient/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSearchCriteria {
    /// First name fragment
    #[serde(default)]
    pub first_name: String,

    /// Last name fragment
    #[serde(default)]
    pub last_name: String,

    /// 1-based page number
    pub page: u32,

    /// Page size
    pub page_size: u32,
}

impl PatientSearchCriteria {
    /// Criteria for the first page of a name search
    pub fn by_name(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// True when both name fragments are blank (whitespace counts as blank)
    pub fn is_blank(&self) -> bool {
        self.first_name.trim().is_empty() && self.last_name.trim().is_empty()
    }

    /// Query parameters in the order the API documents them
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("firstname", self.first_name.trim().to_string()),
            ("lastname", self.last_name.trim().to_string()),
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patient_deserializes_with_missing_fields() {
        let patient: Patient = serde_json::from_value(json!({
            "id": 5,
            "attributes": {"first_name": "Ana", "last_name": "Cruz"}
        }))
        .unwrap();

        assert_eq!(patient.id.value(), 5);
        assert_eq!(patient.full_name(), "Ana Cruz");
        assert_eq!(patient.attributes.zip_code, "");
    }

    #[test]
    fn test_patient_deserializes_with_null_fields() {
        let patient: Patient = serde_json::from_value(json!({
            "id": "5",
            "attributes": {"first_name": "Ana", "last_name": "Cruz", "middle_name": null}
        }))
        .unwrap();

        assert_eq!(patient.attributes.middle_name, "");
        assert_eq!(patient.full_name(), "Ana Cruz");
    }

    #[test]
    fn test_attributes_serialize_blank_optionals_as_empty_strings() {
        let attrs = PatientAttributes {
            first_name: "Ana".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&attrs).unwrap();
        assert_eq!(value["middle_name"], json!(""));
        assert_eq!(value["first_name"], json!("Ana"));
    }

    #[test]
    fn test_criteria_blank_detection() {
        assert!(PatientSearchCriteria::by_name(" ", "").is_blank());
        assert!(!PatientSearchCriteria::by_name("", "Cruz").is_blank());
    }

    #[test]
    fn test_query_pairs() {
        let criteria = PatientSearchCriteria::by_name("Ana", "Cruz")
            .with_page(3)
            .with_page_size(25);
        let pairs = criteria.query_pairs();
        assert_eq!(pairs[0], ("firstname", "Ana".to_string()));
        assert_eq!(pairs[2], ("page", "3".to_string()));
        assert_eq!(pairs[3], ("page_size", "25".to_string()));
    }
}
