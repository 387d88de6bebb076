//! REST API handlers backing the demo UI.
//!
//! The dataset API is read-only: datasets come from configuration files
//! and live reload, never from the UI.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::{DatasetConfig, Settings};

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub settings: Arc<RwLock<Settings>>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// GET /api/datasets
pub async fn list_datasets(State(state): State<ApiState>) -> impl IntoResponse {
    let settings = state.settings.read().await;
    Json(ApiResponse::success(settings.datasets.clone()))
}

/// GET /api/datasets/:name
pub async fn get_dataset(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let settings = state.settings.read().await;
    match settings.datasets.iter().find(|dataset| dataset.name == name) {
        Some(dataset) => {
            (StatusCode::OK, Json(ApiResponse::success(dataset.clone()))).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<DatasetConfig>::error(format!(
                "Dataset not found: {}",
                name
            ))),
        )
            .into_response(),
    }
}
