//! Asset source value object
//!
//! Classifies the raw source string an asset was registered with.

use std::fmt;

/// Where an asset's content comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetSource {
    /// Path relative to the public directory (theme prefix already applied)
    Path(String),
    /// Absolute or protocol-relative URL, never rewritten
    Url(String),
    /// Literal markup such as `<script>…</script>`, passed through verbatim
    Inline(String),
}

impl AssetSource {
    /// Classify a raw source string.
    ///
    /// Anything containing `<` is inline markup; anything that parses as a
    /// URL with a host (or starts with `//`) is a URL; the rest is a path.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.contains('<') {
            AssetSource::Inline(raw)
        } else if is_url(&raw) {
            AssetSource::Url(raw)
        } else {
            AssetSource::Path(raw)
        }
    }

    /// The identifier used for cache keys and link generation
    pub fn as_str(&self) -> &str {
        match self {
            AssetSource::Path(s) | AssetSource::Url(s) | AssetSource::Inline(s) => s,
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, AssetSource::Inline(_))
    }

    pub fn is_url(&self) -> bool {
        matches!(self, AssetSource::Url(_))
    }
}

/// True for absolute URLs with a host and for protocol-relative URLs.
pub fn is_url(value: &str) -> bool {
    if value.starts_with("//") {
        return true;
    }
    url::Url::parse(value)
        .map(|u| u.has_host())
        .unwrap_or(false)
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for AssetSource {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for AssetSource {
    fn from(s: String) -> Self {
        Self::parse(s)
    }
}
