mod app;
mod convert;
mod messages;
mod panels;
mod progress;
mod states;
mod workers;

use std::path::Path;

use anyhow::Context;
use juxta_core::config::ViewerConfig;
use tracing::{info, warn};

const CONFIG_FILE: &str = "juxta.toml";

/// Read `juxta.toml` from the working directory, falling back to defaults.
fn load_config() -> ViewerConfig {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return ViewerConfig::default();
    }
    let parsed = std::fs::read_to_string(path)
        .context("Failed to read juxta.toml")
        .and_then(|s| toml::from_str(&s).context("Invalid juxta.toml"));
    match parsed {
        Ok(config) => {
            info!("Loaded {CONFIG_FILE}");
            config
        }
        Err(e) => {
            warn!("{e:#}; using defaults");
            ViewerConfig::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true)
            .with_title("Juxta"),
        ..Default::default()
    };

    eframe::run_native(
        "Juxta",
        options,
        Box::new(|cc| Ok(Box::new(app::JuxtaApp::new(&cc.egui_ctx, config)?))),
    )
}
