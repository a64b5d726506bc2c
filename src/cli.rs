use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// themekit - theme rendering and asset pipeline
#[derive(Parser, Debug)]
#[command(name = "themekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Public (document root) directory, overrides `app.public_dir`
    #[arg(long, global = true)]
    pub public: Option<PathBuf>,

    /// Config file to use instead of the discovered one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a view inside a theme layout
    Render {
        /// View name, e.g. `home.index`
        view: String,

        /// Theme to select (defaults to `theme.default`)
        #[arg(short, long)]
        theme: Option<String>,

        /// Layout to render (defaults to `theme.layout`)
        #[arg(short, long)]
        layout: Option<String>,

        /// View data as a JSON object
        #[arg(short, long)]
        data: Option<String>,

        /// Only look the view up inside the theme
        #[arg(long)]
        scope: bool,

        /// Application view directory
        #[arg(long, default_value = "views")]
        views: PathBuf,
    },

    /// Order the assets of a manifest, optionally compressing them
    Assets {
        /// Manifest listing `[[script]]` and `[[style]]` entries
        manifest: PathBuf,

        /// Write the compressed bundles and print their tags
        #[arg(long)]
        compress: bool,

        /// Rewrite bundles even when they look up to date
        #[arg(short, long, requires = "compress")]
        force: bool,
    },

    /// Print the effective configuration
    Config {
        /// Apply this theme's `theme.toml` overlay
        #[arg(short, long)]
        theme: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["themekit"]).is_err());
    }

    #[test]
    fn test_cli_parse_render() {
        let cli = Cli::try_parse_from(["themekit", "render", "home.index", "-t", "dark"]).unwrap();
        if let Commands::Render {
            view,
            theme,
            layout,
            data,
            scope,
            views,
        } = cli.command
        {
            assert_eq!(view, "home.index");
            assert_eq!(theme.as_deref(), Some("dark"));
            assert_eq!(layout, None);
            assert_eq!(data, None);
            assert!(!scope);
            assert_eq!(views, PathBuf::from("views"));
        } else {
            panic!("Expected Render command");
        }
    }

    #[test]
    fn test_cli_parse_assets() {
        let cli =
            Cli::try_parse_from(["themekit", "assets", "assets.toml", "--compress", "-f"]).unwrap();
        if let Commands::Assets {
            manifest,
            compress,
            force,
        } = cli.command
        {
            assert_eq!(manifest, PathBuf::from("assets.toml"));
            assert!(compress);
            assert!(force);
        } else {
            panic!("Expected Assets command");
        }
    }

    #[test]
    fn test_cli_force_requires_compress() {
        assert!(Cli::try_parse_from(["themekit", "assets", "a.toml", "--force"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "themekit",
            "config",
            "--public",
            "www",
            "-vv",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.public, Some(PathBuf::from("www")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Config { theme: None }));
    }
}
