//! Settings parser for `config.toml`

use std::path::{Path, PathBuf};

use nonogram_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "nonogram-viewer";

const DEFAULT_CONFIG: &str = r#"# Nonogram Viewer Configuration

[api]
base_url = "http://localhost:8080/api"
catalog_endpoint = "builtin_list"   # or "puzzles"
request_timeout_ms = 30000
# docs_url = "http://localhost:8080/swagger-ui/index.html"

[ui]
cell_size_px = 22                   # 12..=40
show_clues = true
"#;

/// `<config dir>/nonogram-viewer`, if the platform has a config dir.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Load settings from `config_dir/config.toml`.
///
/// Returns defaults if the file is missing or invalid.
pub fn load_settings(config_dir: &Path) -> Settings {
    load_settings_file(&config_dir.join(CONFIG_FILENAME))
}

/// Load settings from an explicit file path.
pub fn load_settings_file(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default `config.toml` into `config_dir` if absent.
///
/// Returns the path of the config file.
pub fn init_config_file(config_dir: &Path) -> Result<PathBuf> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", config_dir, e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}
