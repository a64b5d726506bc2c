//! Subcommand implementations

pub mod assets;
pub mod config;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use themekit::config::{Config, PROJECT_CONFIG_FILE};

/// Resolve the configuration for this invocation.
///
/// An explicit `--config` file wins over discovery; `--public` wins over
/// every file and environment value.
pub fn load_config(explicit: Option<&Path>, public: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            for warning in &warnings {
                warn!("{warning}");
            }
            config.with_env_overrides()
        }
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            Config::load_or_default(Some(&discover_project_root(&cwd)))
        }
    };

    if let Some(public) = public {
        config.app.public_dir = public.to_path_buf();
    }
    Ok(config)
}

/// Discover the project root directory from an invocation directory.
///
/// Walking upward from `start`, the first directory holding
/// `themekit.toml` or `.git` wins. Falls back to `start`.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(PROJECT_CONFIG_FILE).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_project_root_prefers_nearest_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("site/src")).unwrap();
        std::fs::write(root.join("site").join(PROJECT_CONFIG_FILE), "").unwrap();

        assert_eq!(discover_project_root(&root.join("site/src")), root.join("site"));
    }

    #[test]
    fn discover_project_root_falls_back_to_git_root() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("a/b")).unwrap();

        assert_eq!(discover_project_root(&root.join("a/b")), root.to_path_buf());
    }

    #[test]
    fn explicit_config_and_public_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "[theme]\ndefault = \"dark\"\n").unwrap();

        let config = load_config(Some(&path), Some(Path::new("www"))).unwrap();
        assert_eq!(config.theme.default, "dark");
        assert_eq!(config.app.public_dir, PathBuf::from("www"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.toml")), None).unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }
}
