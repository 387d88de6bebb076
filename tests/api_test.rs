use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use picklist::adapters::health_handler::HealthHandler;
use picklist::config::{DatasetConfig, ServerSettings, Settings};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::util::ServiceExt;

fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        datasets: vec![DatasetConfig {
            name: "fruits".to_string(),
            searchable: true,
            multiple: false,
            track_by: None,
            label: None,
            options: vec![json!("Apple"), json!("Banana"), json!("Cherry")],
        }],
    }
}

fn test_app() -> axum::Router {
    let settings = Arc::new(RwLock::new(test_settings()));
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));
    picklist::create_app(settings, health_handler)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["datasets"], 1);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint_with_datasets() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_datasets() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/datasets")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["name"], "fruits");
    assert_eq!(body["data"][0]["searchable"], true);
    assert_eq!(body["data"][0]["options"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_dataset_by_name() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/datasets/fruits")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "fruits");
}

#[tokio::test]
async fn test_unknown_dataset_is_not_found() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/datasets/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("nope"));
}
