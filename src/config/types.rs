//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::ports::FileSystem;
use crate::error::ThemeResult;

use super::loader;
use crate::domain::value_objects::ConfigWarning;

/// Theme selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSection {
    /// Directory under the public dir holding every theme
    #[serde(default = "default_theme_dir")]
    pub dir: String,

    /// Theme used when none is selected explicitly
    #[serde(default = "default_name")]
    pub default: String,

    /// Layout used when none is selected explicitly
    #[serde(default = "default_name")]
    pub layout: String,

    /// Theme whose views back this one when a view is missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherit: Option<String>,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            dir: default_theme_dir(),
            default: default_name(),
            layout: default_name(),
            inherit: None,
        }
    }
}

fn default_theme_dir() -> String {
    "themes".to_string()
}

fn default_name() -> String {
    "default".to_string()
}

/// Directory names inside a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainersConfig {
    #[serde(default = "default_layout_dir")]
    pub layout: String,

    #[serde(default = "default_asset_dir")]
    pub asset: String,

    #[serde(default = "default_partial_dir")]
    pub partial: String,

    #[serde(default = "default_widget_dir")]
    pub widget: String,

    #[serde(default = "default_view_dir")]
    pub view: String,
}

impl Default for ContainersConfig {
    fn default() -> Self {
        Self {
            layout: default_layout_dir(),
            asset: default_asset_dir(),
            partial: default_partial_dir(),
            widget: default_widget_dir(),
            view: default_view_dir(),
        }
    }
}

fn default_layout_dir() -> String {
    "layouts".to_string()
}

fn default_asset_dir() -> String {
    "assets".to_string()
}

fn default_partial_dir() -> String {
    "partials".to_string()
}

fn default_widget_dir() -> String {
    "widgets".to_string()
}

fn default_view_dir() -> String {
    "views".to_string()
}

/// Asset compression settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Cache directory under the public dir
    #[serde(default = "default_compress_dir")]
    pub compress_dir: String,

    /// Rewrite cache artifacts even when they look up to date
    #[serde(default)]
    pub force_compress: bool,

    /// Base URL for assets (CDN); falls back to `app.url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            compress_dir: default_compress_dir(),
            force_compress: false,
            url: None,
        }
    }
}

fn default_compress_dir() -> String {
    "cache".to_string()
}

/// Application settings the theme needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Public (document root) directory
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Application root URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            url: None,
        }
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeSection,

    #[serde(default)]
    pub containers: ContainersConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ThemeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ThemeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse configuration text, collecting unknown keys as warnings
    pub fn parse_with_warnings(
        content: &str,
        file: &Path,
    ) -> ThemeResult<(Self, Vec<ConfigWarning>)> {
        loader::parse_with_warnings(content, file)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (THEMEKIT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Overlay a theme-local config read through `fs`, if the file exists.
    ///
    /// Values in the overlay win per key path; tables are merged.
    pub fn with_theme_overlay<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        path: &Path,
    ) -> ThemeResult<(Self, Vec<ConfigWarning>)> {
        loader::with_theme_overlay(self, fs, path)
    }

    /// Directory of a theme, relative to the public dir
    pub fn theme_path(&self, theme: &str) -> String {
        format!("{}/{}", self.theme.dir, theme)
    }

    /// Asset base path of a theme, relative to the public dir
    pub fn theme_asset_path(&self, theme: &str) -> String {
        format!("{}/{}", self.theme_path(theme), self.containers.asset)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> ThemeResult<String> {
        toml::to_string_pretty(self).map_err(|e| crate::error::ThemeError::Config {
            file: PathBuf::new(),
            message: e.to_string(),
        })
    }
}
