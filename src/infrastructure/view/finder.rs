//! View name resolution
//!
//! `a.b` is looked up as `a/b.{ext}` under every global path in order;
//! `ns::a.b` only under the hint paths registered for `ns`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::split_view_name;

/// Extensions tried for file-backed views, in order
pub const DEFAULT_EXTENSIONS: &[&str] = &["html", "tera"];

#[derive(Debug, Clone, Default)]
pub struct ViewFinder {
    paths: Vec<PathBuf>,
    hints: HashMap<String, Vec<PathBuf>>,
    extensions: Vec<String>,
}

impl ViewFinder {
    pub fn new<I, S>(paths: Vec<PathBuf>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths,
            hints: HashMap::new(),
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Register (or replace) the hint paths of a namespace
    pub fn add_namespace(&mut self, namespace: &str, hints: Vec<PathBuf>) {
        self.hints.insert(namespace.to_string(), hints);
    }

    pub fn hints(&self, namespace: &str) -> Option<&[PathBuf]> {
        self.hints.get(namespace).map(Vec::as_slice)
    }

    /// Every file a view name may live in, most specific first
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let (namespace, view) = split_view_name(name);
        let roots: &[PathBuf] = match namespace {
            Some(ns) => self.hints(ns).unwrap_or(&[]),
            None => &self.paths,
        };
        let relative = view.replace('.', "/");

        let mut candidates = Vec::new();
        for root in roots {
            if self.extensions.is_empty() {
                candidates.push(root.join(&relative));
            }
            for ext in &self.extensions {
                candidates.push(root.join(format!("{relative}.{ext}")));
            }
        }
        candidates
    }

    /// First candidate accepted by `exists`
    pub fn find<F>(&self, name: &str, exists: F) -> Option<PathBuf>
    where
        F: Fn(&Path) -> bool,
    {
        self.candidates(name).into_iter().find(|path| exists(path))
    }
}
