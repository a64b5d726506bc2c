//! File-backed views rendered with tera
//!
//! Templates are read through the FileSystem port and rendered one-off with
//! autoescaping. Shared values sit underneath the per-call data.

use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::domain::ports::{with_shared, FileSystem, ViewData, ViewError, ViewRenderer};
use crate::domain::services::inline_template::describe_tera_error;
use crate::infrastructure::fs::LocalFs;

use super::finder::{ViewFinder, DEFAULT_EXTENSIONS};

#[derive(Debug)]
pub struct FsViewRenderer<F: FileSystem = LocalFs> {
    fs: F,
    finder: ViewFinder,
    shared: ViewData,
}

impl FsViewRenderer<LocalFs> {
    /// Views on local disk, global names resolved under `paths`
    pub fn local(paths: Vec<PathBuf>) -> Self {
        Self::new(LocalFs::new(), paths)
    }
}

impl<F: FileSystem> FsViewRenderer<F> {
    pub fn new(fs: F, paths: Vec<PathBuf>) -> Self {
        Self {
            fs,
            finder: ViewFinder::new(paths, DEFAULT_EXTENSIONS.iter().copied()),
            shared: ViewData::new(),
        }
    }

    pub fn finder(&self) -> &ViewFinder {
        &self.finder
    }
}

impl<F: FileSystem> ViewRenderer for FsViewRenderer<F> {
    fn exists(&self, name: &str) -> bool {
        self.finder.find(name, |p| self.fs.exists(p)).is_some()
    }

    fn render(&self, name: &str, data: &ViewData) -> Result<String, ViewError> {
        let path = self
            .finder
            .find(name, |p| self.fs.exists(p))
            .ok_or_else(|| ViewError::NotFound {
                name: name.to_string(),
            })?;
        debug!(view = name, path = %path.display(), "rendering view");

        let render_error = |message: String| ViewError::Render {
            name: name.to_string(),
            message,
        };
        let source = self
            .fs
            .read_to_string(&path)
            .map_err(|e| render_error(e.to_string()))?;
        let context = tera::Context::from_value(Value::Object(with_shared(&self.shared, data)))
            .map_err(|e| render_error(describe_tera_error(&e)))?;

        tera::Tera::one_off(&source, &context, true)
            .map_err(|e| render_error(describe_tera_error(&e)))
    }

    fn add_namespace(&mut self, namespace: &str, hints: Vec<PathBuf>) {
        self.finder.add_namespace(namespace, hints);
    }

    fn share(&mut self, key: &str, value: Value) {
        self.shared.insert(key.to_string(), value);
    }

    fn shared(&self) -> &ViewData {
        &self.shared
    }
}
