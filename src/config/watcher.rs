//! Filesystem watcher that reloads settings when configuration changes.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{error, info, warn};

/// Watches the settings file and the dataset directory and fires
/// `on_change` whenever either is touched. Dropping the value stops the
/// watch; the reload thread then drains and exits.
pub struct ReloadWatcher {
    _watcher: RecommendedWatcher,
}

impl ReloadWatcher {
    pub fn spawn<F>(paths: Vec<PathBuf>, on_change: F) -> Result<Self>
    where
        F: Fn() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(tx, notify::Config::default())?;

        for path in &paths {
            if path.exists() {
                watcher.watch(path, RecursiveMode::Recursive)?;
                info!("Watching configuration path: {}", path.display());
            } else {
                warn!(
                    "Configuration path does not exist, skipping: {}",
                    path.display()
                );
            }
        }

        thread::spawn(move || {
            while let Ok(event) = rx.recv() {
                match event {
                    Ok(_) => {
                        // Editors often write a file several times in quick
                        // succession; let the burst settle, then collapse
                        // whatever queued up into one reload.
                        thread::sleep(Duration::from_millis(150));
                        while rx.try_recv().is_ok() {}
                        info!("Configuration change detected, reloading");
                        on_change();
                    }
                    Err(e) => error!("Watch error: {:?}", e),
                }
            }
        });

        Ok(Self { _watcher: watcher })
    }
}
