//! Dental history domain model

use super::ids::{DentalHistoryId, PatientId};
use super::nullable::or_default;
use serde::{Deserialize, Serialize};

/// Attributes for `POST /dental_history`
///
/// Name fields are a denormalized copy of the patient's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DentalHistoryAttributes {
    #[serde(default, deserialize_with = "or_default")]
    pub clinic_id: String,
    pub patient_id: PatientId,
    #[serde(default, deserialize_with = "or_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub first_name: String,
    /// Date of the last dental visit, `YYYY-MM-DD`
    #[serde(default, deserialize_with = "or_default")]
    pub last_visit: String,
}

/// A dental history record owned by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DentalHistory {
    pub id: DentalHistoryId,
    pub attributes: DentalHistoryAttributes,
}
