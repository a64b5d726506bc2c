//! themekit CLI
//!
//! Usage: themekit <COMMAND>
//!
//! Commands:
//!   render  Render a view inside a theme layout
//!   assets  Order (and compress) the assets of a manifest
//!   config  Print the effective configuration

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// Environment variable holding a tracing filter, e.g. `themekit=debug`
const LOG_ENV: &str = "THEMEKIT_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref(), cli.public.as_deref())?;

    match cli.command {
        Commands::Render {
            view,
            theme,
            layout,
            data,
            scope,
            views,
        } => commands::render::cmd_render(
            config,
            commands::render::RenderArgs {
                view,
                theme,
                layout,
                data,
                scope,
                views,
            },
        ),
        Commands::Assets {
            manifest,
            compress,
            force,
        } => commands::assets::cmd_assets(&config, &manifest, compress, force, cli.json),
        Commands::Config { theme } => commands::config::cmd_config(&config, theme.as_deref(), cli.json),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("themekit={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
