//! Application entry points shared by the TUI and headless modes

use std::path::Path;

use nonogram_api::{CatalogEndpoint, HttpPuzzleApi};
use nonogram_app::config::{self, Settings};
use nonogram_app::Engine;
use nonogram_core::prelude::*;
use nonogram_core::PuzzleId;

use crate::headless::{self, HeadlessExit};

/// Command-line values that take precedence over `config.toml`
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_base: Option<String>,
    pub catalog_endpoint: Option<CatalogEndpoint>,
    pub cell_size_px: Option<u16>,
}

impl Overrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(base_url) = &self.api_base {
            settings.api.base_url = base_url.clone();
        }
        if let Some(endpoint) = self.catalog_endpoint {
            settings.api.catalog_endpoint = endpoint;
        }
        if let Some(px) = self.cell_size_px {
            settings.ui.cell_size_px = px;
        }
    }
}

/// Settings from `config_path`, else from the default config directory.
pub fn load_settings(config_path: Option<&Path>) -> Settings {
    match config_path {
        Some(path) => config::load_settings_file(path),
        None => config::default_config_dir()
            .map(|dir| config::load_settings(&dir))
            .unwrap_or_default(),
    }
}

fn create_engine(settings: Settings) -> Result<Engine<HttpPuzzleApi>> {
    info!(
        "Solving service: {} (catalog {:?})",
        settings.api.base_url, settings.api.catalog_endpoint
    );
    let api = HttpPuzzleApi::new(settings.api.to_api_config())?;
    Ok(Engine::new(settings, api))
}

/// Run the terminal UI against the configured service.
pub async fn run_with_settings(settings: Settings) -> Result<()> {
    let engine = create_engine(settings)?;
    let result = nonogram_tui::run(engine).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Nonogram viewer exiting");
    result
}

/// Run without a terminal UI, printing engine events as JSON lines.
pub async fn run_headless(settings: Settings, target: Option<PuzzleId>) -> Result<HeadlessExit> {
    let engine = create_engine(settings)?;
    headless::run_headless(engine, target).await
}
