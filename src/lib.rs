//! themekit - theme, region and asset pipeline for server-rendered pages
//!
//! A [`Theme`] selects a theme directory at runtime, composes a page out of
//! named regions and renders it through a layout. Scripts and styles are
//! registered on named containers, ordered by their dependencies and, for
//! queues, flattened into one minified, cached file per group.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    AssetCompressor, AssetContainer, AssetManager, AssetQueue, RenderKind, Theme, ThemeEvent,
    ThemeState, Widget, WidgetContext, WidgetRegistry,
};
pub use config::Config;
pub use domain::entities::{Asset, Breadcrumb, RegionStore};
pub use domain::ports::{FileSystem, ViewData, ViewRenderer};
pub use domain::services::arrange;
pub use domain::value_objects::{AssetGroup, AssetSource};
pub use error::{ThemeError, ThemeResult};
pub use infrastructure::{FsViewRenderer, LocalFs, MemoryFs, MemoryViews};
