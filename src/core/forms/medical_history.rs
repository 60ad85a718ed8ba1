//! Medical history form

use super::rules::{optional, optional_json, required, required_id};
use super::IntakeForm;
use crate::domain::{
    ClinicContext, MedicalHistoryAttributes, Patient, PatientId, ValidationErrors,
};
use serde::{Deserialize, Serialize};

/// Raw input of the medical history form
///
/// `existing_conditions` and `allergy` are entered as JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalHistoryForm {
    pub clinic_id: String,
    pub patient_id: Option<u64>,
    pub last_name: String,
    pub first_name: String,
    pub specialty: String,
    pub street_address: String,
    pub city_town: String,
    pub province: String,
    pub zip_code: String,
    pub phone_number: String,
    pub good_health: bool,
    pub under_treatment: String,
    pub serious_illness: String,
    pub hospitalized: String,
    pub medication: String,
    pub tobacco_use: bool,
    pub drug_use: bool,
    pub bleeding_time: String,
    pub pregnant: bool,
    pub nursing: bool,
    pub birth_control_pills: bool,
    pub blood_type: String,
    pub blood_pressure: String,
    pub existing_conditions: String,
    pub allergy: String,
}

impl MedicalHistoryForm {
    /// Form prefilled with the patient's identifier, names and address
    pub fn for_patient(patient: &Patient) -> Self {
        let attrs = &patient.attributes;
        Self {
            clinic_id: attrs.clinic_id.clone(),
            patient_id: Some(patient.id.value()),
            last_name: attrs.last_name.clone(),
            first_name: attrs.first_name.clone(),
            street_address: attrs.street_address.clone(),
            city_town: attrs.city_town.clone(),
            province: attrs.province.clone(),
            zip_code: attrs.zip_code.clone(),
            phone_number: attrs.mobile_phone.clone(),
            ..Default::default()
        }
    }

    /// Sets the patient the history belongs to
    pub fn with_patient_id(mut self, patient_id: PatientId) -> Self {
        self.patient_id = Some(patient_id.value());
        self
    }
}

impl IntakeForm for MedicalHistoryForm {
    type Attributes = MedicalHistoryAttributes;

    fn validate(
        &self,
        context: &ClinicContext,
    ) -> Result<MedicalHistoryAttributes, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let patient_id = required_id(
            &mut errors,
            "patient_id",
            self.patient_id,
            "Patient ID is required",
        );
        let last_name = required(&mut errors, "last_name", &self.last_name, "Last name is required");
        let first_name = required(
            &mut errors,
            "first_name",
            &self.first_name,
            "First name is required",
        );
        let street_address = required(
            &mut errors,
            "street_address",
            &self.street_address,
            "Street address is required",
        );
        let city_town = required(
            &mut errors,
            "city_town",
            &self.city_town,
            "City/Town is required",
        );
        let province = required(&mut errors, "province", &self.province, "Province is required");
        let existing_conditions =
            optional_json(&mut errors, "existing_conditions", &self.existing_conditions);
        let allergy = optional_json(&mut errors, "allergy", &self.allergy);

        let Ok(patient_id) = PatientId::new(patient_id) else {
            return Err(errors);
        };

        errors.into_result(MedicalHistoryAttributes {
            patient_id,
            clinic_id: super::resolve_clinic_id(&self.clinic_id, context),
            last_name,
            first_name,
            specialty: optional(&self.specialty),
            street_address,
            city_town,
            province,
            zip_code: optional(&self.zip_code),
            phone_number: optional(&self.phone_number),
            good_health: self.good_health,
            under_treatment: optional(&self.under_treatment),
            serious_illness: optional(&self.serious_illness),
            hospitalized: optional(&self.hospitalized),
            medication: optional(&self.medication),
            tobacco_use: self.tobacco_use,
            drug_use: self.drug_use,
            bleeding_time: optional(&self.bleeding_time),
            pregnant: self.pregnant,
            nursing: self.nursing,
            birth_control_pills: self.birth_control_pills,
            blood_type: optional(&self.blood_type),
            blood_pressure: optional(&self.blood_pressure),
            existing_conditions,
            allergy,
        })
    }
}
