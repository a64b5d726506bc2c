//! Asset compressor
//!
//! Flattens an ordered asset group into one minified file under the cache
//! directory. The file name is derived from the sources, so the same set of
//! sources always maps to the same artifact.
//!
//! Staleness is judged by byte length only: an existing artifact whose size
//! equals the new minified buffer is left alone unless a rebuild is forced.
//! Content edits that keep the length do not invalidate the cache.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::domain::entities::Asset;
use crate::domain::ports::FileSystem;
use crate::domain::services::{minify, rewrite_css_urls};
use crate::domain::value_objects::{AssetGroup, AssetSource, ContentHash};
use crate::error::ThemeResult;

use super::assets::UrlResolver;

/// Result of compressing one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheArtifact {
    /// Public-relative path, `{compress_dir}/{key}.min.{ext}`; empty for an
    /// empty group
    pub public_path: String,
    /// Location on disk, under the public dir
    pub file_path: PathBuf,
    /// Whether the file was (re)written
    pub written: bool,
}

impl CacheArtifact {
    fn empty() -> Self {
        Self {
            public_path: String::new(),
            file_path: PathBuf::new(),
            written: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.public_path.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct AssetCompressor {
    public_dir: PathBuf,
    compress_dir: String,
    urls: UrlResolver,
}

impl AssetCompressor {
    pub fn new(
        public_dir: impl Into<PathBuf>,
        compress_dir: impl Into<String>,
        urls: UrlResolver,
    ) -> Self {
        Self {
            public_dir: public_dir.into(),
            compress_dir: compress_dir.into().trim_matches('/').to_string(),
            urls,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.app.public_dir.clone(),
            config.assets.compress_dir.clone(),
            UrlResolver::from_config(config),
        )
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    pub fn urls(&self) -> &UrlResolver {
        &self.urls
    }

    /// Public-relative artifact path for a set of ordered assets
    pub fn artifact_path(&self, group: AssetGroup, assets: &[Asset]) -> String {
        let key = ContentHash::from_parts(assets.iter().map(|a| a.source().as_str()));
        format!("{}/{}.min.{}", self.compress_dir, key, group.extension())
    }

    /// Compress `assets` (already in dependency order) into one artifact.
    pub fn compress<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        group: AssetGroup,
        assets: &[Asset],
        force: bool,
    ) -> ThemeResult<CacheArtifact> {
        if assets.is_empty() {
            return Ok(CacheArtifact::empty());
        }

        let public_path = self.artifact_path(group, assets);
        let file_path = self.public_dir.join(&public_path);

        let mut buffer = String::new();
        for asset in assets {
            buffer.push_str(&self.content(fs, group, asset)?);
            buffer.push('\n');
        }
        let minified = minify(group, &buffer);

        if !force && self.is_up_to_date(fs, &file_path, &minified) {
            debug!(path = %file_path.display(), "compressed {group} bundle is up to date");
            return Ok(CacheArtifact {
                public_path,
                file_path,
                written: false,
            });
        }

        if let Some(parent) = file_path.parent() {
            if !fs.is_dir(parent) {
                fs.create_dir_all(parent)?;
            }
        }
        fs.write(&file_path, minified.as_bytes())?;
        info!(
            path = %file_path.display(),
            assets = assets.len(),
            bytes = minified.len(),
            "wrote compressed {group} bundle"
        );

        Ok(CacheArtifact {
            public_path,
            file_path,
            written: true,
        })
    }

    fn is_up_to_date<F: FileSystem + ?Sized>(&self, fs: &F, path: &Path, minified: &str) -> bool {
        fs.exists(path)
            && fs
                .file_size(path)
                .map(|size| size == minified.len() as u64)
                .unwrap_or(false)
    }

    fn content<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        group: AssetGroup,
        asset: &Asset,
    ) -> ThemeResult<String> {
        match asset.source() {
            AssetSource::Url(url) => {
                debug!(asset = asset.name(), url = %url, "remote asset left out of bundle");
                Ok(String::new())
            }
            AssetSource::Inline(markup) => Ok(unwrap_element(markup).to_string()),
            AssetSource::Path(path) => {
                let raw = fs.read_to_string(&self.public_dir.join(path.trim_start_matches('/')))?;
                Ok(match group {
                    AssetGroup::Style => rewrite_css_urls(&raw, path, |p| self.urls.to(p)),
                    AssetGroup::Script => raw,
                })
            }
        }
    }
}

/// Inner text of a `<script>` or `<style>` wrapper; other markup unchanged.
fn unwrap_element(markup: &str) -> &str {
    let trimmed = markup.trim();
    for (open, close) in [("<script", "</script>"), ("<style", "</style>")] {
        if trimmed.starts_with(open) && trimmed.ends_with(close) {
            if let Some(start) = trimmed.find('>') {
                let end = trimmed.len() - close.len();
                if start < end {
                    return &trimmed[start + 1..end];
                }
            }
        }
    }
    markup
}
