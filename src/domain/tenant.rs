//! Clinic context threaded through every service call

use super::ids::ClinicId;

/// Header carrying the clinic identifier on every request
pub const CLINIC_ID_HEADER: &str = "X-Clinic-Id";

/// Explicit per-session clinic scope
///
/// Created once at startup and cloned into the API client. When no clinic is
/// set, requests go out without the `X-Clinic-Id` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClinicContext {
    clinic_id: Option<ClinicId>,
}

impl ClinicContext {
    /// Context scoped to one clinic
    pub fn new(clinic_id: ClinicId) -> Self {
        Self {
            clinic_id: Some(clinic_id),
        }
    }

    /// Context without a clinic identifier
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Builds a context from an optional raw value; blank values count as absent
    pub fn from_optional(raw: Option<&str>) -> Self {
        Self {
            clinic_id: raw.and_then(|s| ClinicId::new(s).ok()),
        }
    }

    /// The clinic identifier, if any
    pub fn clinic_id(&self) -> Option<&ClinicId> {
        self.clinic_id.as_ref()
    }

    /// The clinic identifier as sent in request bodies (empty when absent)
    pub fn clinic_id_or_empty(&self) -> String {
        self.clinic_id
            .as_ref()
            .map(|c| c.as_str().to_string())
            .unwrap_or_default()
    }
}
