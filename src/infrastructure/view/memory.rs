//! In-memory views rendered with the blade-style string renderer
//!
//! Templates are keyed by their path without extension, e.g.
//! `themes/default/layouts/default`. Name resolution is the same as for
//! file-backed views.

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;

use crate::domain::ports::{with_shared, ViewData, ViewError, ViewRenderer};
use crate::domain::services::render_blade;

use super::finder::ViewFinder;

#[derive(Debug, Clone, Default)]
pub struct MemoryViews {
    templates: HashMap<PathBuf, String>,
    finder: ViewFinder,
    shared: ViewData,
}

impl MemoryViews {
    /// Empty store; global names resolve under `paths`
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            templates: HashMap::new(),
            finder: ViewFinder::new(paths, Vec::<String>::new()),
            shared: ViewData::new(),
        }
    }

    /// Add or replace a template
    pub fn insert(&mut self, path: impl Into<PathBuf>, template: impl Into<String>) -> &mut Self {
        self.templates.insert(path.into(), template.into());
        self
    }

    /// Builder form of [`MemoryViews::insert`]
    pub fn with(mut self, path: impl Into<PathBuf>, template: impl Into<String>) -> Self {
        self.insert(path, template);
        self
    }
}

impl ViewRenderer for MemoryViews {
    fn exists(&self, name: &str) -> bool {
        self.finder
            .find(name, |p| self.templates.contains_key(p))
            .is_some()
    }

    fn render(&self, name: &str, data: &ViewData) -> Result<String, ViewError> {
        let template = self
            .finder
            .find(name, |p| self.templates.contains_key(p))
            .and_then(|path| self.templates.get(&path))
            .ok_or_else(|| ViewError::NotFound {
                name: name.to_string(),
            })?;

        render_blade(template, &with_shared(&self.shared, data)).map_err(|e| ViewError::Render {
            name: name.to_string(),
            message: e.message,
        })
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
