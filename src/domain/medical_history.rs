//! Medical history domain model

use super::ids::{MedicalHistoryId, PatientId};
use super::nullable::or_default;
use serde::{Deserialize, Serialize};

/// Attributes for `POST /medical_history`
///
/// Health conditions are flat boolean flags. Optional free-text fields are
/// sent as `""` when blank. `existing_conditions` and `allergy` carry
/// structured JSON and are sent as `null` when empty. Missing or `null`
/// text and flags read back as `""` and `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistoryAttributes {
    pub patient_id: PatientId,
    #[serde(default, deserialize_with = "or_default")]
    pub clinic_id: String,
    #[serde(default, deserialize_with = "or_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub specialty: String,
    #[serde(default, deserialize_with = "or_default")]
    pub street_address: String,
    #[serde(default, deserialize_with = "or_default")]
    pub city_town: String,
    #[serde(default, deserialize_with = "or_default")]
    pub province: String,
    #[serde(default, deserialize_with = "or_default")]
    pub zip_code: String,
    #[serde(default, deserialize_with = "or_default")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "or_default")]
    pub good_health: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub under_treatment: String,
    #[serde(default, deserialize_with = "or_default")]
    pub serious_illness: String,
    #[serde(default, deserialize_with = "or_default")]
    pub hospitalized: String,
    #[serde(default, deserialize_with = "or_default")]
    pub medication: String,
    #[serde(default, deserialize_with = "or_default")]
    pub tobacco_use: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub drug_use: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub bleeding_time: String,
    #[serde(default, deserialize_with = "or_default")]
    pub pregnant: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub nursing: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub birth_control_pills: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub blood_type: String,
    #[serde(default, deserialize_with = "or_default")]
    pub blood_pressure: String,
    #[serde(default)]
    pub existing_conditions: Option<serde_json::Value>,
    #[serde(default)]
    pub allergy: Option<serde_json::Value>,
}

/// A medical history record owned by the remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub id: MedicalHistoryId,
    pub attributes: MedicalHistoryAttributes,
}
