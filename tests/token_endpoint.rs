//! End-to-end tests for the token endpoint over a real socket.

use std::sync::Arc;

use agora_token_service::{
    adapters::repositories::StaticCredentialsRepository, app_state, build_router,
    domain::config::credentials::AgoraCredentials,
};
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};

const APP_ID: &str = "970ca35de60c44645bbae8a215061b33";
const APP_CERTIFICATE: &str = "5cfd2fd1755d40ecb72977518be15d3b";

async fn spawn_server(credentials: AgoraCredentials) -> String {
    let state = app_state(Arc::new(StaticCredentialsRepository::new(credentials)));
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn configured_server() -> String {
    spawn_server(AgoraCredentials::new(APP_ID, APP_CERTIFICATE)).await
}

fn assert_cors(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-headers"],
        "authorization, x-client-info, apikey, content-type"
    );
}

#[tokio::test]
async fn test_issue_publisher_token() {
    let base_url = configured_server().await;

    let response = Client::new()
        .post(&base_url)
        .json(&json!({ "channelName": "room1", "uid": 42, "role": "publisher" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert_eq!(response.headers()["content-type"], "application/json");

    let body: Value = response.json().await.unwrap();
    assert!(body["token"].as_str().unwrap().starts_with("007"));
    assert_eq!(body["channelName"], "room1");
    assert_eq!(body["uid"], 42);
}

#[tokio::test]
async fn test_any_path_and_method_issue_tokens() {
    let base_url = configured_server().await;

    let response = Client::new()
        .put(format!("{}/functions/v1/agora-token", base_url))
        .json(&json!({ "channelName": "room1", "uid": 0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["uid"], 0);
}

#[tokio::test]
async fn test_missing_channel_name() {
    let base_url = configured_server().await;

    let response = Client::new()
        .post(&base_url)
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors(&response);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "channelName is required" }));
}

#[tokio::test]
async fn test_unconfigured_credentials() {
    let base_url = spawn_server(AgoraCredentials::placeholder()).await;

    let response = Client::new()
        .post(&base_url)
        .json(&json!({ "channelName": "room1" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&response);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "error": "Agora credentials not set in environment variables" })
    );
}

#[tokio::test]
async fn test_preflight() {
    let base_url = spawn_server(AgoraCredentials::placeholder()).await;

    let response = Client::new()
        .request(Method::OPTIONS, &base_url)
        .header("Origin", "https://app.example.com")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_malformed_body() {
    let base_url = configured_server().await;

    let response = Client::new()
        .post(&base_url)
        .body("{\"channelName\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors(&response);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_oversized_body_is_a_json_400() {
    let base_url = configured_server().await;
    let padding = "x".repeat(3 * 1024 * 1024);

    let response = Client::new()
        .post(&base_url)
        .header("content-type", "application/json")
        .body(format!(r#"{{"channelName":"room1","padding":"{}"}}"#, padding))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors(&response);
    assert_eq!(response.headers()["content-type"], "application/json");
    let body: Value = response.json().await.unwrap();
    assert!(!body["error"].as_str().unwrap().is_empty());
}
