//! Configuration loading
//!
//! Settings live in `<config dir>/nonogram-viewer/config.toml`. A missing or
//! unreadable file never stops the viewer; defaults are used instead.

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, init_config_file, load_settings, load_settings_file};
pub use types::{ApiSettings, Settings, UiSettings};
