//! ViewRenderer port - the template engine the theme renders through
//!
//! View names are dotted paths, optionally namespaced: `home.index` or
//! `theme.default::layouts.default`. A namespace maps to an ordered list of
//! hint directories; the first hint containing the view wins.

use std::path::PathBuf;

use serde_json::{Map, Value};

/// Data handed to a template
pub type ViewData = Map<String, Value>;

/// Separator between a namespace and the view path
pub const NAMESPACE_SEPARATOR: &str = "::";

/// View renderer errors
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("view [{name}] not found")]
    NotFound { name: String },

    #[error("failed to render view [{name}]: {message}")]
    Render { name: String, message: String },
}

/// Abstract view renderer
///
/// Implementations:
/// - `FsViewRenderer` - templates on disk, rendered with tera
/// - `MemoryViews` - in-memory templates, for tests and embedding
pub trait ViewRenderer {
    /// Check whether a view can be resolved
    fn exists(&self, name: &str) -> bool;

    /// Render a view; shared data is merged underneath `data`
    fn render(&self, name: &str, data: &ViewData) -> Result<String, ViewError>;

    /// Register (or replace) the hint paths of a namespace
    fn add_namespace(&mut self, namespace: &str, hints: Vec<PathBuf>);

    /// Share a value with every view
    fn share(&mut self, key: &str, value: Value);

    /// All shared values
    fn shared(&self) -> &ViewData;
}

/// Split `ns::a.b` into `(Some("ns"), "a.b")`.
pub fn split_view_name(name: &str) -> (Option<&str>, &str) {
    match name.split_once(NAMESPACE_SEPARATOR) {
        Some((ns, view)) => (Some(ns), view),
        None => (None, name),
    }
}

/// Merge shared data underneath per-call data.
pub fn with_shared(shared: &ViewData, data: &ViewData) -> ViewData {
    let mut merged = shared.clone();
    for (key, value) in data {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
