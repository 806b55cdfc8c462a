// src/main.rs
use eframe::egui;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod config;
mod state;
mod ui;

use app::StockRocketApp;
use config::Settings;

fn main() -> Result<()> {
    let settings = Settings::load()?;
    init_tracing(&settings.log_filter);
    info!(
        endpoint = %settings.endpoint,
        themable = settings.themable,
        theme = ?settings.theme,
        "settings loaded"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 860.0])
            .with_title("Stock Rocket"),
        ..Default::default()
    };

    eframe::run_native(
        "Stock Rocket",
        options,
        Box::new(move |_cc| Box::new(StockRocketApp::new(settings, runtime))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

// RUST_LOG wins over the configured filter
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
