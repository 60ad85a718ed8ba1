//! End-to-end intake workflow tests over HTTP

use clinic_intake::adapters::api::HttpIntakeApi;
use clinic_intake::core::forms::PatientForm;
use clinic_intake::core::workflow::{IntakeState, IntakeWorkflow};
use clinic_intake::domain::{ClinicContext, ClinicId, IntakeError, PatientId};
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;

const CLINIC: &str = "3f2504e0-4f89-11d3-9a0c-0305e82c3301";

fn ana_cruz() -> PatientForm {
    serde_json::from_value(json!({
        "first_name": "Ana",
        "last_name": "Cruz",
        "birthdate": "1990-01-01",
        "gender": "Female",
        "nationality": "Filipino",
        "street_address": "1 Main St",
        "city_town": "Metro",
        "province": "NCR",
        "consultation_reason": "Checkup"
    }))
    .unwrap()
}

fn workflow(url: String) -> IntakeWorkflow {
    let context = ClinicContext::new(ClinicId::new(CLINIC).unwrap());
    let api = HttpIntakeApi::new(url, context).unwrap();
    IntakeWorkflow::new(Arc::new(api))
}

#[tokio::test]
async fn test_ana_cruz_intake() {
    let mut server = Server::new_async().await;

    let patient_mock = server
        .mock("POST", "/patient")
        .match_header("x-clinic-id", CLINIC)
        .match_body(Matcher::PartialJson(json!({
            "clinic_id": CLINIC,
            "first_name": "Ana",
            "last_name": "Cruz",
            "birthdate": "1990-01-01",
            "consultation_reason": "Checkup"
        })))
        .with_status(201)
        .with_body(
            json!({
                "data": [{
                    "id": 12,
                    "attributes": {
                        "clinic_id": CLINIC,
                        "first_name": "Ana",
                        "last_name": "Cruz",
                        "birthdate": "1990-01-01",
                        "gender": "Female",
                        "nationality": "Filipino",
                        "street_address": "1 Main St",
                        "city_town": "Metro",
                        "province": "NCR",
                        "consultation_reason": "Checkup"
                    }
                }],
                "meta": {"message": "Patient created"}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let dental_mock = server
        .mock("POST", "/dental_history")
        .match_header("x-clinic-id", CLINIC)
        .match_body(Matcher::PartialJson(json!({
            "patient_id": 12,
            "first_name": "Ana",
            "last_name": "Cruz",
            "last_visit": "2024-01-01"
        })))
        .with_status(201)
        .with_body(
            json!({
                "data": [{
                    "id": 7,
                    "attributes": {
                        "clinic_id": CLINIC,
                        "patient_id": "12",
                        "first_name": "Ana",
                        "last_name": "Cruz",
                        "last_visit": "2024-01-01"
                    }
                }],
                "meta": {"message": "Dental history created"}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let mut workflow = workflow(server.url());

    let patient = workflow.submit_patient(&ana_cruz()).await.unwrap();
    assert_eq!(patient.entity.id.value(), 12);
    assert_eq!(
        workflow.state(),
        IntakeState::AwaitingDentalHistory {
            patient_id: patient.entity.id
        }
    );

    let mut dental = workflow.dental_history_form();
    dental.last_visit = "2024-01-01".to_string();
    let history = workflow.submit_dental_history(&dental).await.unwrap();

    assert_eq!(history.entity.attributes.patient_id, patient.entity.id);
    assert_eq!(history.message, "Dental history created");
    assert!(matches!(
        workflow.state(),
        IntakeState::AwaitingMedicalHistory {
            dental_history_id: Some(_),
            ..
        }
    ));

    patient_mock.assert_async().await;
    dental_mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_required_field_sends_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/patient")
        .expect(0)
        .create_async()
        .await;

    let mut form = ana_cruz();
    form.last_name = "   ".to_string();

    let mut workflow = workflow(server.url());
    let err = workflow.submit_patient(&form).await.unwrap_err();

    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.for_field("last_name"), Some("Last name is required"));
    assert_eq!(workflow.state(), IntakeState::AwaitingPatient);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_patient_keeps_workflow_editable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/patient")
        .with_status(422)
        .with_body("invalid clinic_id")
        .create_async()
        .await;

    let mut workflow = workflow(server.url());
    let err = workflow.submit_patient(&ana_cruz()).await.unwrap_err();

    assert!(matches!(err, IntakeError::Api(_)));
    assert_eq!(workflow.state(), IntakeState::AwaitingPatient);
    let message = workflow.last_error().unwrap();
    assert!(message.contains("422"));
    assert!(message.contains("invalid clinic_id"));
}

#[tokio::test]
async fn test_dental_history_before_patient_is_rejected() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/dental_history")
        .expect(0)
        .create_async()
        .await;

    let mut workflow = workflow(server.url());
    let mut dental = workflow.dental_history_form();
    dental.patient_id = Some(PatientId::new(12).unwrap().value());
    dental.last_visit = "2024-01-01".to_string();

    let err = workflow.submit_dental_history(&dental).await.unwrap_err();
    assert!(matches!(err, IntakeError::OutOfSequence(_)));
    mock.assert_async().await;
}
