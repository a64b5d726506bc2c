//! Asset group value object - the two asset categories
//!
//! - `Script` group: JavaScript, emitted as `<script>` tags / `.js` artifacts
//! - `Style` group: CSS, emitted as `<link>` tags / `.css` artifacts

use serde::{Deserialize, Serialize};

/// Category of a registered asset
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetGroup {
    #[default]
    Script,
    Style,
}

impl AssetGroup {
    /// Both groups, in the order they are compressed
    pub const ALL: [AssetGroup; 2] = [AssetGroup::Script, AssetGroup::Style];

    /// Infer the group from a source path: `.css` is a style, anything else a script
    pub fn from_source(source: &str) -> Self {
        let path = source.split(['?', '#']).next().unwrap_or(source);
        match std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(ext) if ext.eq_ignore_ascii_case("css") => AssetGroup::Style,
            _ => AssetGroup::Script,
        }
    }

    /// Parse the aliases accepted by `write`-style registration
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "script" | "js" => Some(AssetGroup::Script),
            "style" | "css" => Some(AssetGroup::Style),
            _ => None,
        }
    }

    /// File extension of the compressed artifact
    pub fn extension(&self) -> &'static str {
        match self {
            AssetGroup::Script => "js",
            AssetGroup::Style => "css",
        }
    }
}

impl std::fmt::Display for AssetGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetGroup::Script => write!(f, "script"),
            AssetGroup::Style => write!(f, "style"),
        }
    }
}
