//! Configuration types

use std::time::Duration;

use nonogram_api::{ApiConfig, ApiEndpoints, CatalogEndpoint};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::state::DisplayConfig;

/// Settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Solving service connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Which listing route the service exposes
    #[serde(default)]
    pub catalog_endpoint: CatalogEndpoint,

    /// Transport timeout for one request; `0` falls back to the default
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Override for the API docs link shown in the header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            catalog_endpoint: CatalogEndpoint::default(),
            request_timeout_ms: default_request_timeout_ms(),
            docs_url: None,
        }
    }
}

impl ApiSettings {
    /// Connection settings for the HTTP client.
    pub fn to_api_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.clone())
            .with_catalog_endpoint(self.catalog_endpoint)
            .with_timeout(self.request_timeout())
    }

    /// Effective request timeout. Zero would fail every request, so it
    /// falls back to the default.
    pub fn request_timeout(&self) -> Duration {
        if self.request_timeout_ms == 0 {
            warn!(
                "request_timeout_ms = 0 is not usable, using {} ms",
                default_request_timeout_ms()
            );
            return Duration::from_millis(default_request_timeout_ms());
        }
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Configured docs link, else the swagger UI at the service origin.
    ///
    /// `None` when neither is set and the base URL does not parse.
    pub fn resolved_docs_url(&self) -> Option<String> {
        self.docs_url.clone().or_else(|| {
            ApiEndpoints::new(&self.base_url, self.catalog_endpoint)
                .ok()
                .map(|endpoints| endpoints.docs_url())
        })
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Edge length of one grid cell, clamped into 12..=40
    #[serde(default = "default_cell_size_px")]
    pub cell_size_px: u16,

    /// Show row and column clues beside the grid
    #[serde(default = "default_true")]
    pub show_clues: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            cell_size_px: default_cell_size_px(),
            show_clues: true,
        }
    }
}

fn default_cell_size_px() -> u16 {
    DisplayConfig::DEFAULT_CELL_SIZE_PX
}

fn default_true() -> bool {
    true
}
