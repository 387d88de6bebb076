use clap::Parser;
use picklist::adapters::health_handler::HealthHandler;
use picklist::cli::Cli;
use picklist::config::{watcher::ReloadWatcher, Settings};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting Picklist demo server on {}:{}", host, port);

    // Wrap settings in Arc<RwLock> for live reload
    let settings = Arc::new(RwLock::new(settings));

    // Reload settings when the config file or the dataset directory changes
    let settings_for_watcher = settings.clone();
    let cli_for_watcher = cli.clone();
    let watch_paths = vec![cli.config.clone(), PathBuf::from("config/datasets")];
    let _watcher = ReloadWatcher::spawn(watch_paths, move || {
        match Settings::new_with_cli(&cli_for_watcher) {
            Ok(new_settings) => {
                *settings_for_watcher.blocking_write() = new_settings;
                info!("Configuration reloaded successfully");
            }
            Err(e) => error!("Failed to reload configuration: {}", e),
        }
    })?;

    let health_handler = Arc::new(HealthHandler::new(settings.clone()));
    let app = picklist::create_app(settings, health_handler);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
