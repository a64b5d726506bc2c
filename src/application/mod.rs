//! Application Layer
//!
//! Orchestrates the domain: asset containers and queues, the compressor that
//! turns a queue into one cached file per group, and the theme render
//! context.

pub mod assets;
pub mod compressor;
pub mod theme;

pub use assets::{AssetContainer, AssetManager, AssetQueue, ThemeAssetBase, UrlResolver};
pub use compressor::{AssetCompressor, CacheArtifact};
pub use theme::{RenderKind, Theme, ThemeEvent, ThemeState, Widget, WidgetContext, WidgetRegistry};
