//! # Picklist - Select Dropdown Demo Host
//!
//! Picklist is a searchable single/multi-select dropdown component for
//! Leptos. This crate is the demo host: it serves the built `picklist-ui`
//! site and a small read-only dataset API the demo pages pull their
//! option lists from.
//!
//! ## Features
//!
//! - **Embedded UI**: the built site ships inside the binary
//! - **File-based datasets**: option lists in TOML/YAML/JSON
//! - **Validation**: datasets are checked at startup, not at click time
//! - **Live Reload**: configuration changes apply without a restart
//! - **Health Checks**: readiness and liveness endpoints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use picklist::config::Settings;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration; the server starts on the configured host:port
//!     let settings = Settings::new()?;
//!     let _ = settings;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::ui_handler::UiHandler;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `settings` - Shared application settings (reloaded in place)
/// * `health_handler` - Health check handler
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(
    settings: Arc<RwLock<config::Settings>>,
    health_handler: Arc<HealthHandler>,
) -> Router {
    // Health check endpoints
    let public_router = Router::new()
        .route(
            "/health",
            get({
                let handler = health_handler.clone();
                move || {
                    let h = handler.clone();
                    async move { h.health().await }
                }
            }),
        )
        .route(
            "/health/ready",
            get({
                let handler = health_handler.clone();
                move || {
                    let h = handler.clone();
                    async move { h.ready().await }
                }
            }),
        )
        .route(
            "/health/live",
            get({
                let handler = health_handler.clone();
                move || {
                    let h = handler.clone();
                    async move { h.live().await }
                }
            }),
        );

    // API routes for the demo UI
    let api_state = ApiState { settings };
    let api_router = Router::new()
        .route("/datasets", get(api_handler::list_datasets))
        .route("/datasets/:name", get(api_handler::get_dataset))
        .with_state(api_state);

    let router = public_router
        .nest("/api", api_router)
        // UI endpoint (catch-all for SPA)
        .fallback(UiHandler::serve);

    router.layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
