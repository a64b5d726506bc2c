//! Configuration module for themekit
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (THEMEKIT_*)
//! 3. Project config (./themekit.toml)
//! 4. User config ({config_dir}/themekit/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! When a theme is selected, its `theme.toml` overlays the result per key
//! path.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    merge_values, user_config_path, with_overrides_from, PROJECT_CONFIG_FILE, THEME_CONFIG_FILE,
};
pub use types::{AppConfig, AssetsConfig, Config, ContainersConfig, ThemeSection};
