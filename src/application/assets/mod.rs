//! Asset registration, ordering and emission

mod container;
mod manager;
mod queue;
mod url;

pub use container::{tag, AssetContainer, ThemeAssetBase, DEFAULT_CONTAINER};
pub use manager::{AssetManager, Cook};
pub use queue::AssetQueue;
pub use url::UrlResolver;
