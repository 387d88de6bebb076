use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Settings;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub datasets: usize,
}

pub struct HealthHandler {
    settings: Arc<RwLock<Settings>>,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(settings: Arc<RwLock<Settings>>) -> Self {
        Self {
            settings,
            start_time: std::time::Instant::now(),
        }
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let uptime = self.start_time.elapsed().as_secs();
        let datasets = self.settings.read().await.datasets.len();
        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: uptime,
            datasets,
        };

        (StatusCode::OK, Json(status))
    }

    /// Readiness check - returns 200 once configuration is loaded and at
    /// least one dataset is available to serve
    pub async fn ready(&self) -> impl IntoResponse {
        let settings = self.settings.read().await;

        if settings.datasets.is_empty() {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "not_ready",
                    "message": "No datasets loaded"
                })),
            )
        } else {
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "status": "ready",
                    "message": "Server is ready to accept requests"
                })),
            )
        }
    }

    /// Liveness check - returns 200 if server is alive
    pub async fn live(&self) -> impl IntoResponse {
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "alive",
                "message": "Server is alive"
            })),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatasetConfig, ServerSettings, Settings};
    use serde_json::json;

    fn settings(datasets: Vec<DatasetConfig>) -> Arc<RwLock<Settings>> {
        Arc::new(RwLock::new(Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            datasets,
        }))
    }

    fn fruits() -> DatasetConfig {
        DatasetConfig {
            name: "fruits".to_string(),
            searchable: true,
            multiple: false,
            track_by: None,
            label: None,
            options: vec![json!("Apple"), json!("Banana")],
        }
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let handler = HealthHandler::new(settings(vec![fruits()]));

        let response = handler.health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_endpoint_without_datasets() {
        let handler = HealthHandler::new(settings(vec![]));

        let response = handler.ready().await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_ready_endpoint_with_datasets() {
        let handler = HealthHandler::new(settings(vec![fruits()]));

        let response = handler.ready().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_live_endpoint() {
        let handler = HealthHandler::new(settings(vec![]));

        let response = handler.live().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
