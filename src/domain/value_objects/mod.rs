//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_group;
mod asset_source;
mod config_warning;
mod hash;

pub use asset_group::AssetGroup;
pub use asset_source::{is_url, AssetSource};
pub use config_warning::ConfigWarning;
pub use hash::ContentHash;
