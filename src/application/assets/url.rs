//! Public URL generation for assets

use crate::config::Config;
use crate::domain::value_objects::is_url;

const FRONT_CONTROLLER: &str = "/index.php";

/// Turns public-relative paths into URLs.
///
/// The base is the configured asset URL, else the application URL, with any
/// trailing `/index.php` removed. Without either, URLs are root-relative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlResolver {
    base: String,
}

impl UrlResolver {
    pub fn new(asset_url: Option<&str>, app_url: Option<&str>) -> Self {
        let base = asset_url
            .filter(|u| !u.is_empty())
            .or(app_url)
            .unwrap_or_default()
            .trim_end_matches('/');
        let base = base.replace(FRONT_CONTROLLER, "");
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.assets.url.as_deref(), config.app.url.as_deref())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL of a public-relative path; absolute URLs are returned as is
    pub fn to(&self, path: &str) -> String {
        if is_url(path) {
            return path.to_string();
        }
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}
