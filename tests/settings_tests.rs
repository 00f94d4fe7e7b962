use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

mod common;
use common::TestApp;

#[actix_web::test]
async fn test_get_settings_creates_defaults_once() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/admin/settings").to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(first["hero_title"], "INNOVATE. BUILD. TRANSFORM WITH AXIOM.");
    assert_eq!(
        first["hero_subtitle"],
        "We design smart digital experiences that move businesses forward."
    );
    assert_eq!(first["stat_projects"], 0);
    assert_eq!(first["stat_clients"], 0);
    assert_eq!(first["stat_awards"], 0);
    assert_eq!(first["theme_default_dark"], true);
    assert!(first["_id"].is_string());

    let req = test::TestRequest::get().uri("/api/admin/settings").to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(first["_id"], second["_id"]);
    assert_eq!(test_app.store.count("sitesettings").await, 1);
}

#[actix_web::test]
async fn test_upsert_settings_creates_then_updates() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/admin/settings")
        .set_json(json!({ "city": "Lisbon", "stat_clients": 12 }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["status"], "created");
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/admin/settings")
        .set_json(json!({
            "hero_title": "BUILD WITH US",
            "contact_email": "hello@axiom.dev",
            "theme_default_dark": false
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["status"], "updated");
    assert!(updated.get("id").is_none());

    let req = test::TestRequest::get().uri("/api/admin/settings").to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(stored["_id"], id.as_str());
    assert_eq!(stored["hero_title"], "BUILD WITH US");
    assert_eq!(stored["contact_email"], "hello@axiom.dev");
    assert_eq!(stored["theme_default_dark"], false);
    // Omitted fields fall back to their defaults on a full replacement.
    assert_eq!(stored["city"], Value::Null);
    assert_eq!(stored["stat_clients"], 0);
    assert_eq!(test_app.store.count("sitesettings").await, 1);
}

#[actix_web::test]
async fn test_upsert_settings_validation() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/admin/settings")
        .set_json(json!({ "contact_email": "nope", "stat_projects": -1 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["contact_email", "stat_projects"]);
    assert_eq!(test_app.store.count("sitesettings").await, 0);
}

#[actix_web::test]
async fn test_upsert_settings_wrong_type() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/admin/settings")
        .set_json(json!({ "stat_awards": "many" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["field"], "stat_awards");
    assert_eq!(body["errors"][0]["kind"], "invalid_type");
    assert_eq!(test_app.store.count("sitesettings").await, 0);
}

#[actix_web::test]
async fn test_get_settings_without_database() {
    let test_app = TestApp::without_database();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/admin/settings").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
