//! End-to-end checks of the response envelope contract over real HTTP.

use erp_api::config::Environment;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_banner_and_health() {
    let server = common::start_server(Environment::Production).await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers()["content-type"].to_str().unwrap().starts_with("application/json"));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], json!("online"));

    let res = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    let ts = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

#[tokio::test]
async fn test_login_contract() {
    let server = common::start_server(Environment::Production).await;
    let client = common::client();

    let res = client
        .post(server.url("/api/auth/login"))
        .json(&json!({"email": "admin@erp.com", "password": "admin123"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert!(!body["token"].as_str().unwrap().is_empty());

    let res = client
        .post(server.url("/api/auth/login"))
        .json(&json!({"email": "admin@erp.com", "password": "guess"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_list_endpoints_are_stable() {
    let server = common::start_server(Environment::Production).await;
    let client = common::client();

    for path in [
        "/api/clients",
        "/api/dental/appointments",
        "/api/mechanic/workorders",
        "/api/store/products",
        "/api/dashboard/stats",
    ] {
        let first: Value = client.get(server.url(path)).send().await.unwrap().json().await.unwrap();
        let second: Value = client.get(server.url(path)).send().await.unwrap().json().await.unwrap();
        assert_eq!(first, second, "{} changed between calls", path);
        assert_eq!(first["success"], json!(true));
    }
}

#[tokio::test]
async fn test_update_merges_path_id() {
    let server = common::start_server(Environment::Production).await;
    let client = common::client();

    let res = client
        .put(server.url("/api/clients/7"))
        .json(&json!({"name": "X"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["id"], json!("7"));
    assert_eq!(body["data"]["name"], json!("X"));
}

#[tokio::test]
async fn test_trailing_slash_and_wrong_method() {
    let server = common::start_server(Environment::Production).await;
    let client = common::client();

    let res = client.get(server.url("/api/clients/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));

    let res = client.patch(server.url("/api/clients")).send().await.unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "message": "Rota não encontrada"}));
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let server = common::start_server(Environment::Production).await;
    let client = common::client();

    let res = client
        .request(reqwest::Method::OPTIONS, server.url("/api/clients"))
        .header("Origin", "http://frontend.local")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert!(res.status().is_success());
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_malformed_json_detail_gated_by_environment() {
    let client = common::client();

    let prod = common::start_server(Environment::Production).await;
    let res = client
        .post(prod.url("/api/store/sales"))
        .header("content-type", "application/json")
        .body("{broken")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "message": "Erro interno do servidor"}));

    let dev = common::start_server(Environment::Development).await;
    let res = client
        .post(dev.url("/api/store/sales"))
        .header("content-type", "application/json")
        .body("{broken")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("Malformed JSON"));
}
