//! Error types for themekit
//!
//! Uses `thiserror` for library errors. Lookup errors and dependency graph
//! errors are hard failures of the render that raised them.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, ViewError};

/// Result type alias for themekit operations
pub type ThemeResult<T> = Result<T, ThemeError>;

/// Main error type for themekit operations
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme directory does not exist
    #[error("theme [{name}] not found")]
    UnknownTheme { name: String },

    /// Layout template missing from the theme namespace
    #[error("layout [{name}] not found")]
    UnknownLayout { name: String },

    /// Partial template missing from the theme namespace
    #[error("partial view [{view}] not found")]
    UnknownPartial { view: String },

    /// View template missing from every namespace searched
    #[error("view [{view}] not found")]
    UnknownView { view: String },

    /// No factory registered for a widget key
    #[error("widget [{key}] is not registered")]
    UnknownWidget { key: String },

    /// Operation needs a selected theme
    #[error("no theme selected - call theme() first")]
    NoThemeSelected,

    /// render() called before any content was composed
    #[error("no content composed - call of(), scope() or watch() before render()")]
    NothingToRender,

    /// Asset lists itself as a dependency
    #[error("asset [{asset}] is dependent on itself")]
    SelfDependency { asset: String },

    /// Two assets depend on each other
    #[error("assets [{asset}] and [{dependency}] have a circular dependency")]
    CircularDependency { asset: String, dependency: String },

    /// Dependencies that can never be satisfied (cycle of three or more)
    #[error("assets [{}] have unresolvable dependencies", .assets.join(", "))]
    UnresolvableDependencies { assets: Vec<String> },

    /// Inline template failed to compile or render
    #[error("template error in {name}: {message}")]
    Template { name: String, message: String },

    /// View renderer failure
    #[error(transparent)]
    View(#[from] ViewError),

    /// File system port failure
    #[error("file system error: {0}")]
    Fs(#[from] FsError),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
