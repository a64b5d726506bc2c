use anyhow::{Context, Result};
use tracing::warn;

use themekit::config::{Config, THEME_CONFIG_FILE};
use themekit::infrastructure::LocalFs;

pub fn cmd_config(config: &Config, theme: Option<&str>, json: bool) -> Result<()> {
    let effective = match theme {
        Some(theme) => {
            let overlay = config
                .app
                .public_dir
                .join(config.theme_path(theme))
                .join(THEME_CONFIG_FILE);
            let (effective, warnings) = config
                .with_theme_overlay(&LocalFs::new(), &overlay)
                .with_context(|| format!("failed to apply {}", overlay.display()))?;
            for warning in &warnings {
                warn!("{warning}");
            }
            effective
        }
        None => config.clone(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&effective)?);
    } else {
        print!("{}", effective.to_toml_string()?);
    }
    Ok(())
}
