//! API client for the picklist demo host.

#![allow(dead_code)]

use crate::types::Dataset;
use gloo_net::http::Request;

const API_BASE: &str = "/api";

#[derive(Debug, Clone, serde::Deserialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

/// Fetch every configured dataset.
pub async fn get_datasets() -> Result<Vec<Dataset>, String> {
    fetch_json(&format!("{}/datasets", API_BASE)).await
}

/// Fetch one dataset by name.
pub async fn get_dataset(name: &str) -> Result<Dataset, String> {
    fetch_json(&format!("{}/datasets/{}", API_BASE, name)).await
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        api_response
            .data
            .ok_or_else(|| "No data in response".to_string())
    } else {
        Err(api_response
            .error
            .unwrap_or_else(|| "Unknown error".to_string()))
    }
}
