//! Asset queue: a container whose groups are emitted as one compressed
//! artifact each.

use std::ops::{Deref, DerefMut};

use crate::application::compressor::{AssetCompressor, CacheArtifact};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::AssetGroup;
use crate::error::ThemeResult;

use super::container::{tag, AssetContainer};

#[derive(Debug, Clone)]
pub struct AssetQueue {
    container: AssetContainer,
    force_rebuild: bool,
}

impl AssetQueue {
    pub fn new(container: AssetContainer, force_rebuild: bool) -> Self {
        Self {
            container,
            force_rebuild,
        }
    }

    pub fn force_rebuild(&self) -> bool {
        self.force_rebuild
    }

    pub fn set_force_rebuild(&mut self, force: bool) -> &mut Self {
        self.force_rebuild = force;
        self
    }

    /// Compress one group and return its artifact
    pub fn compress_group<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        compressor: &AssetCompressor,
        group: AssetGroup,
        force: bool,
    ) -> ThemeResult<CacheArtifact> {
        let ordered = self.container.arranged(group)?;
        compressor.compress(fs, group, &ordered, force)
    }

    /// Rebuild both groups regardless of cache state
    pub fn compress<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        compressor: &AssetCompressor,
    ) -> ThemeResult<Vec<CacheArtifact>> {
        AssetGroup::ALL
            .iter()
            .map(|group| self.compress_group(fs, compressor, *group, true))
            .collect()
    }

    /// One `<script>` tag for the compressed script bundle
    pub fn scripts<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        compressor: &AssetCompressor,
    ) -> ThemeResult<String> {
        self.bundle_html(fs, compressor, AssetGroup::Script)
    }

    /// One `<link>` tag for the compressed stylesheet bundle
    pub fn styles<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        compressor: &AssetCompressor,
    ) -> ThemeResult<String> {
        self.bundle_html(fs, compressor, AssetGroup::Style)
    }

    fn bundle_html<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        compressor: &AssetCompressor,
        group: AssetGroup,
    ) -> ThemeResult<String> {
        let artifact = self.compress_group(fs, compressor, group, self.force_rebuild)?;
        if artifact.is_empty() {
            return Ok(String::new());
        }
        let url = compressor.urls().to(&artifact.public_path);
        Ok(tag(group, &url, &[]))
    }
}

impl Deref for AssetQueue {
    type Target = AssetContainer;

    fn deref(&self) -> &Self::Target {
        &self.container
    }
}

impl DerefMut for AssetQueue {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.container
    }
}
