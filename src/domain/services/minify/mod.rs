//! Minifiers for compressed asset bundles.

mod css;
mod js;

pub use css::minify_css;
pub use js::minify_js;

use crate::domain::value_objects::AssetGroup;

/// Minify a concatenated buffer with the minifier of its group.
pub fn minify(group: AssetGroup, buffer: &str) -> String {
    match group {
        AssetGroup::Script => minify_js(buffer),
        AssetGroup::Style => minify_css(buffer),
    }
}
