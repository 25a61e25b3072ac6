mod common;

use chat_service::services::providers::mock::MockTextProvider;
use common::TestApp;
use reqwest::Client;
use std::sync::Arc;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn(Arc::new(MockTextProvider::replying("ok"))).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/api/health/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
    assert!(body["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn health_check_ignores_provider_state() {
    // The probe reports the service itself, not the upstream API.
    let app = TestApp::spawn(Arc::new(MockTextProvider::failing("upstream is down"))).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/api/health/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn chat_page_is_served_at_root() {
    let app = TestApp::spawn(Arc::new(MockTextProvider::replying("ok"))).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.expect("Failed to get response body");
    assert!(body.contains("chat-form"));
}
