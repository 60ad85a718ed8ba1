//! New patient form

use super::rules::{optional, optional_email, required, required_date};
use super::IntakeForm;
use crate::domain::{ClinicContext, PatientAttributes, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Raw input of the new patient form
///
/// All fields are free text; blank optional fields are sent as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientForm {
    pub clinic_id: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub birthdate: String,
    pub gender: String,
    pub nick_name: String,
    pub home_phone: String,
    pub office_phone: String,
    pub mobile_phone: String,
    pub email_address: String,
    pub fax_number: String,
    pub nationality: String,
    pub street_address: String,
    pub city_town: String,
    pub province: String,
    pub zip_code: String,
    pub occupation: String,
    pub dental_insurance: String,
    pub guardian_name: String,
    pub guardian_occupation: String,
    pub referrer: String,
    pub consultation_reason: String,
}

impl IntakeForm for PatientForm {
    type Attributes = PatientAttributes;

    fn validate(&self, context: &ClinicContext) -> Result<PatientAttributes, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let attributes = PatientAttributes {
            clinic_id: super::resolve_clinic_id(&self.clinic_id, context),
            last_name: required(&mut errors, "last_name", &self.last_name, "Last name is required"),
            first_name: required(
                &mut errors,
                "first_name",
                &self.first_name,
                "First name is required",
            ),
            middle_name: optional(&self.middle_name),
            birthdate: required_date(
                &mut errors,
                "birthdate",
                &self.birthdate,
                "Birthdate is required",
            ),
            gender: required(&mut errors, "gender", &self.gender, "Gender is required"),
            nick_name: optional(&self.nick_name),
            home_phone: optional(&self.home_phone),
            office_phone: optional(&self.office_phone),
            mobile_phone: optional(&self.mobile_phone),
            email_address: optional_email(&mut errors, "email_address", &self.email_address),
            fax_number: optional(&self.fax_number),
            nationality: required(
                &mut errors,
                "nationality",
                &self.nationality,
                "Nationality is required",
            ),
            street_address: required(
                &mut errors,
                "street_address",
                &self.street_address,
                "Street address is required",
            ),
            city_town: required(
                &mut errors,
                "city_town",
                &self.city_town,
                "City/Town is required",
            ),
            province: required(&mut errors, "province", &self.province, "Province is required"),
            zip_code: optional(&self.zip_code),
            occupation: optional(&self.occupation),
            dental_insurance: optional(&self.dental_insurance),
            guardian_name: optional(&self.guardian_name),
            guardian_occupation: optional(&self.guardian_occupation),
            referrer: optional(&self.referrer),
            consultation_reason: required(
                &mut errors,
                "consultation_reason",
                &self.consultation_reason,
                "Consultation reason is required",
            ),
        };

        errors.into_result(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClinicId;
    use test_case::test_case;

    fn complete_form() -> PatientForm {
        PatientForm {
            first_name: "Ana".to_string(),
            last_name: "Cruz".to_string(),
            birthdate: "1990-01-01".to_string(),
            gender: "Female".to_string(),
            nationality: "Filipino".to_string(),
            street_address: "1 Main St".to_string(),
            city_town: "Metro".to_string(),
            province: "NCR".to_string(),
            consultation_reason: "Checkup".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_form_validates() {
        let attrs = complete_form()
            .validate(&ClinicContext::anonymous())
            .unwrap();
        assert_eq!(attrs.first_name, "Ana");
        assert_eq!(attrs.birthdate, "1990-01-01");
        assert_eq!(attrs.middle_name, "");
        assert_eq!(attrs.clinic_id, "");
    }

    #[test_case("last_name", "Last name is required")]
    #[test_case("first_name", "First name is required")]
    #[test_case("birthdate", "Birthdate is required")]
    #[test_case("gender", "Gender is required")]
    #[test_case("nationality", "Nationality is required")]
    #[test_case("street_address", "Street address is required")]
    #[test_case("city_town", "City/Town is required")]
    #[test_case("province", "Province is required")]
    #[test_case("consultation_reason", "Consultation reason is required")]
    fn test_each_required_field(field: &str, message: &str) {
        let mut value = serde_json::to_value(complete_form()).unwrap();
        value[field] = serde_json::json!("  ");
        let form: PatientForm = serde_json::from_value(value).unwrap();

        let errors = form.validate(&ClinicContext::anonymous()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.for_field(field), Some(message));
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = PatientForm::default()
            .validate(&ClinicContext::anonymous())
            .unwrap_err();
        assert_eq!(errors.len(), 9);
    }

    #[test]
    fn test_invalid_email() {
        let mut form = complete_form();
        form.email_address = "not-an-email".to_string();
        let errors = form.validate(&ClinicContext::anonymous()).unwrap_err();
        assert_eq!(errors.for_field("email_address"), Some("Invalid email address"));
    }

    #[test]
    fn test_clinic_id_defaults_from_context() {
        let ctx = ClinicContext::new(ClinicId::new("clinic-1").unwrap());
        let attrs = complete_form().validate(&ctx).unwrap();
        assert_eq!(attrs.clinic_id, "clinic-1");

        let mut form = complete_form();
        form.clinic_id = "clinic-2".to_string();
        assert_eq!(form.validate(&ctx).unwrap().clinic_id, "clinic-2");
    }
}
