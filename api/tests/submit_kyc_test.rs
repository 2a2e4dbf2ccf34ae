//! HTTP tests for the bearer-protected KYC submission endpoint.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use uuid::Uuid;

use common::{create_test_app, delivered_codes, harness};

fn kyc_payload() -> Value {
    json!({
        "fullName": "Jane Doe",
        "dateOfBirth": "1990-04-02",
        "nationality": "AU",
        "addressLine1": "1 Example St",
        "city": "Sydney",
        "postalCode": "2000",
        "country": "AU",
        "idDocumentType": "passport",
        "idDocumentNumber": "PA1234567"
    })
}

/// Run the register + verify flow and return the minted session token.
///
/// Drives the verification service directly; the HTTP-level flow is covered
/// by the customer flow tests.
async fn verified_token(h: &common::TestHarness) -> (String, String) {
    h.state
        .verification
        .register("default", "a@x.com", "555-0100")
        .await
        .unwrap();

    let (email_code, phone_code) = delivered_codes(h, "a@x.com", "555-0100").await;

    let session = h
        .state
        .verification
        .verify("a@x.com", &email_code, &phone_code)
        .await
        .unwrap();

    (session.token, session.customer.id.to_string())
}

#[actix_web::test]
async fn test_submit_kyc_requires_bearer_token() {
    let h = harness().await;
    let app = test::init_service(create_test_app(&h)).await;

    let req = test::TestRequest::post()
        .uri("/customer/submit-kyc")
        .set_json(kyc_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_submit_kyc_rejects_invalid_token() {
    let h = harness().await;
    let app = test::init_service(create_test_app(&h)).await;

    let req = test::TestRequest::post()
        .uri("/customer/submit-kyc")
        .insert_header(("Authorization", "Bearer not-a-real-token"))
        .set_json(kyc_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_submit_kyc_stores_submission_for_token_identity() {
    let h = harness().await;
    let app = test::init_service(create_test_app(&h)).await;

    let (token, customer_id) = verified_token(&h).await;

    let req = test::TestRequest::post()
        .uri("/customer/submit-kyc")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(kyc_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "KYC submission received");

    use kyc_core::repositories::KycSubmissionRepository;
    let stored = h
        .submissions
        .find_by_customer(Uuid::parse_str(&customer_id).unwrap())
        .await
        .unwrap()
        .expect("submission stored");
    assert_eq!(stored.details.full_name, "Jane Doe");
    assert_eq!(stored.tenant_id, h.tenant.id);
}

#[actix_web::test]
async fn test_submit_kyc_rejects_invalid_form() {
    let h = harness().await;
    let app = test::init_service(create_test_app(&h)).await;

    let (token, _) = verified_token(&h).await;

    let mut payload = kyc_payload();
    payload["fullName"] = json!("");

    let req = test::TestRequest::post()
        .uri("/customer/submit-kyc")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid KYC form data");
}
