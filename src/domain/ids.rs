//! Domain identifier types
//!
//! Newtype wrappers that keep the clinic identifier and the three
//! server-assigned record identifiers from being mixed up.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Clinic (tenant) identifier
///
/// Scopes every request to one clinic and travels as the `X-Clinic-Id` header.
///
/// # Examples
///
/// ```
/// use clinic_intake::domain::ids::ClinicId;
/// use std::str::FromStr;
///
/// let clinic_id = ClinicId::from_str("3f2504e0-4f89-11d3-9a0c-0305e82c3301").unwrap();
/// assert_eq!(clinic_id.as_str(), "3f2504e0-4f89-11d3-9a0c-0305e82c3301");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClinicId(String);

impl ClinicId {
    /// Creates a new ClinicId, rejecting blank values
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err("Clinic ID cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the clinic ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ClinicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClinicId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ClinicId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Accepts either a JSON number or a numeric string.
///
/// Some API builds serialize record ids as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumericId {
    Number(u64),
    Text(String),
}

fn deserialize_numeric_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumericId::deserialize(deserializer)? {
        RawNumericId::Number(n) => Ok(n),
        RawNumericId::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric id: {s:?}"))),
    }
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a server-assigned identifier; zero is not a valid id
            pub fn new(id: u64) -> Result<Self, String> {
                if id == 0 {
                    return Err(concat!($label, " must be at least 1").to_string());
                }
                Ok(Self(id))
            }

            /// Returns the raw numeric value
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id: u64 = s
                    .trim()
                    .parse()
                    .map_err(|_| format!(concat!("Invalid ", $label, ": {}"), s))?;
                Self::new(id)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserialize_numeric_id(deserializer).map(Self)
            }
        }
    };
}

numeric_id!(
    /// Server-assigned patient identifier
    PatientId,
    "Patient ID"
);

numeric_id!(
    /// Server-assigned dental history identifier
    DentalHistoryId,
    "Dental history ID"
);

numeric_id!(
    /// Server-assigned medical history identifier
    MedicalHistoryId,
    "Medical history ID"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clinic_id_trims_and_rejects_blank() {
        assert_eq!(ClinicId::new("  abc  ").unwrap().as_str(), "abc");
        assert!(ClinicId::new("   ").is_err());
        assert!(ClinicId::from_str("").is_err());
    }

    #[test]
    fn test_patient_id_rejects_zero() {
        assert!(PatientId::new(0).is_err());
        assert_eq!(PatientId::new(12).unwrap().value(), 12);
    }

    #[test]
    fn test_patient_id_from_str() {
        assert_eq!(PatientId::from_str(" 42 ").unwrap().value(), 42);
        assert!(PatientId::from_str("abc").is_err());
        assert!(PatientId::from_str("0").is_err());
    }

    #[test]
    fn test_numeric_id_deserializes_number_or_string() {
        let a: PatientId = serde_json::from_str("7").unwrap();
        let b: PatientId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<DentalHistoryId>("\"x7\"").is_err());
    }

    #[test]
    fn test_numeric_id_serializes_as_number() {
        let id = MedicalHistoryId::new(9).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "9");
    }
}
