//! Configuration loading and overlaying

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ConfigWarning;
use crate::error::{ThemeError, ThemeResult};

use super::types::Config;

/// Project config file name
pub const PROJECT_CONFIG_FILE: &str = "themekit.toml";

/// Theme-local config file name
pub const THEME_CONFIG_FILE: &str = "theme.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ThemeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse configuration text and collect unknown keys.
pub fn parse_with_warnings(
    content: &str,
    file: &Path,
) -> ThemeResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| config_error(file, e))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: file.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    warn!("{warning}");
                }
                debug!(path = %path.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(err) => warn!(path = %path.display(), "ignoring config: {err}"),
        }
    }

    with_env_overrides(Config::default())
}

/// `{config_dir}/themekit/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("themekit").join("config.toml"))
}

/// Apply environment variable overrides (THEMEKIT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply THEMEKIT_* overrides read through `lookup`
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup("THEMEKIT_THEME_DIR").filter(|v| !v.is_empty()) {
        config.theme.dir = dir;
    }

    if let Some(val) = lookup("THEMEKIT_FORCE_COMPRESS") {
        config.assets.force_compress = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes");
    }

    if let Some(url) = lookup("THEMEKIT_ASSET_URL") {
        config.assets.url = Some(url).filter(|u| !u.is_empty());
    }

    if let Some(dir) = lookup("THEMEKIT_COMPRESS_DIR").filter(|v| !v.is_empty()) {
        config.assets.compress_dir = dir;
    }

    config
}

/// Overlay the theme-local file at `path` onto `base`.
///
/// A missing file yields `base` unchanged.
pub fn with_theme_overlay<F: FileSystem + ?Sized>(
    base: &Config,
    fs: &F,
    path: &Path,
) -> ThemeResult<(Config, Vec<ConfigWarning>)> {
    if !fs.exists(path) {
        return Ok((base.clone(), Vec::new()));
    }
    let content = fs.read_to_string(path)?;

    // Unknown keys are reported against the overlay file itself.
    let (_, warnings) = parse_with_warnings(&content, path)?;

    let overlay: toml::Value = toml::from_str(&content).map_err(|e| config_error(path, e))?;
    let mut merged = toml::Value::try_from(base).map_err(|e| config_error(path, e))?;
    merge_values(&mut merged, overlay);

    let config: Config = merged.try_into().map_err(|e| config_error(path, e))?;
    debug!(path = %path.display(), "applied theme config overlay");
    Ok((config, warnings))
}

/// Merge `overlay` into `base`: tables merge key by key, anything else is
/// replaced.
pub fn merge_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

fn config_error(file: &Path, err: impl std::fmt::Display) -> ThemeError {
    ThemeError::Config {
        file: file.to_path_buf(),
        message: err.to_string(),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "theme",
        "dir",
        "default",
        "layout",
        "inherit",
        "containers",
        "asset",
        "partial",
        "widget",
        "view",
        "assets",
        "compress_dir",
        "force_compress",
        "url",
        "app",
        "public_dir",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
