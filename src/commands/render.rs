use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use themekit::application::{RenderKind, Theme};
use themekit::config::Config;
use themekit::domain::ports::ViewData;
use themekit::infrastructure::FsViewRenderer;

pub struct RenderArgs {
    pub view: String,
    pub theme: Option<String>,
    pub layout: Option<String>,
    pub data: Option<String>,
    pub scope: bool,
    pub views: PathBuf,
}

pub fn cmd_render(config: Config, args: RenderArgs) -> Result<()> {
    let data = parse_data(args.data.as_deref())?;
    let theme_name = args
        .theme
        .clone()
        .unwrap_or_else(|| config.theme.default.clone());

    let mut theme = Theme::local(config, FsViewRenderer::local(vec![args.views]));
    theme
        .theme(&theme_name)
        .with_context(|| format!("failed to select theme '{theme_name}'"))?;
    if let Some(layout) = &args.layout {
        theme.layout(layout);
    }

    if args.scope {
        theme.scope(&args.view, &data, RenderKind::View)?;
    } else {
        theme.watch(&args.view, &data, RenderKind::View)?;
    }

    let html = theme
        .render()
        .with_context(|| format!("failed to render '{}'", args.view))?;
    println!("{html}");
    Ok(())
}

fn parse_data(raw: Option<&str>) -> Result<ViewData> {
    let Some(raw) = raw else {
        return Ok(ViewData::new());
    };
    match serde_json::from_str(raw).context("--data is not valid JSON")? {
        Value::Object(map) => Ok(map),
        _ => bail!("--data must be a JSON object"),
    }
}
