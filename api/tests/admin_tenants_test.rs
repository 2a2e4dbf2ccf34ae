//! HTTP tests for the tenant provisioning admin endpoint.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{create_test_app, harness, ADMIN_KEY};

#[actix_web::test]
async fn test_create_tenant_requires_admin_key() {
    let h = harness().await;
    let app = test::init_service(create_test_app(&h)).await;

    let payload = json!({
        "name": "Atlas Bank",
        "slug": "atlas-bank",
        "contactEmail": "ops@atlasbank.example"
    });

    // Missing key
    let req = test::TestRequest::post()
        .uri("/admin/tenants")
        .set_json(payload.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Wrong key
    let req = test::TestRequest::post()
        .uri("/admin/tenants")
        .insert_header(("X-Admin-Api-Key", "wrong"))
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_create_tenant_then_register_against_it() {
    let h = harness().await;
    let app = test::init_service(create_test_app(&h)).await;

    let req = test::TestRequest::post()
        .uri("/admin/tenants")
        .insert_header(("X-Admin-Api-Key", ADMIN_KEY))
        .set_json(json!({
            "name": "Atlas Bank",
            "slug": "atlas-bank",
            "contactEmail": "ops@atlasbank.example"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["slug"], "atlas-bank");
    assert_eq!(body["name"], "Atlas Bank");
    assert!(!body["apiKey"].as_str().unwrap().is_empty());

    // Registration resolves the new tenant by slug
    let req = test::TestRequest::post()
        .uri("/customer/register")
        .insert_header(("X-Tenant-Slug", "atlas-bank"))
        .set_json(json!({"email": "a@x.com", "phone": "555-0100"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_create_tenant_duplicate_slug_conflicts() {
    let h = harness().await;
    let app = test::init_service(create_test_app(&h)).await;

    // "default" is already provisioned by the harness
    let req = test::TestRequest::post()
        .uri("/admin/tenants")
        .insert_header(("X-Admin-Api-Key", ADMIN_KEY))
        .set_json(json!({
            "name": "Another Default",
            "slug": "default",
            "contactEmail": "ops@default.example"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_create_tenant_validates_body() {
    let h = harness().await;
    let app = test::init_service(create_test_app(&h)).await;

    for payload in [
        json!({"name": "Atlas Bank", "slug": "Not A Slug!", "contactEmail": "ops@atlasbank.example"}),
        json!({"name": "", "slug": "atlas-bank", "contactEmail": "ops@atlasbank.example"}),
        json!({"name": "Atlas Bank", "slug": "atlas-bank", "contactEmail": "not-an-email"}),
    ] {
        let req = test::TestRequest::post()
            .uri("/admin/tenants")
            .insert_header(("X-Admin-Api-Key", ADMIN_KEY))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
