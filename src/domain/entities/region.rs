//! Region store - named string slots assembled during a render
//!
//! `content` is reserved: only the view composition step writes it.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::ports::ViewData;

/// Name of the reserved content region
pub const CONTENT_REGION: &str = "content";

/// Render-scoped mapping from region name to accumulated content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionStore {
    values: HashMap<String, String>,
    order: Vec<String>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a region. Writing `content` is ignored.
    pub fn set(&mut self, region: &str, value: impl Into<String>) -> &mut Self {
        if region != CONTENT_REGION {
            self.put(region, value.into());
        }
        self
    }

    /// Add to the end of a region, creating it when absent
    pub fn append(&mut self, region: &str, value: impl Into<String>) -> &mut Self {
        if region == CONTENT_REGION {
            return self;
        }
        let value = value.into();
        match self.values.get_mut(region) {
            Some(existing) => existing.push_str(&value),
            None => {
                self.set(region, value);
            }
        }
        self
    }

    /// Add to the start of a region, creating it when absent
    pub fn prepend(&mut self, region: &str, value: impl Into<String>) -> &mut Self {
        if region == CONTENT_REGION {
            return self;
        }
        let value = value.into();
        match self.values.get_mut(region) {
            Some(existing) => existing.insert_str(0, &value),
            None => {
                self.set(region, value);
            }
        }
        self
    }

    pub fn has(&self, region: &str) -> bool {
        self.values.contains_key(region)
    }

    /// Region content, or `default` when the region was never written
    pub fn get<'a>(&'a self, region: &str, default: &'a str) -> &'a str {
        self.values.get(region).map(String::as_str).unwrap_or(default)
    }

    /// Alias of [`RegionStore::get`] used from layouts
    pub fn place<'a>(&'a self, region: &str, default: &'a str) -> &'a str {
        self.get(region, default)
    }

    /// The composed content region
    pub fn content(&self) -> &str {
        self.get(CONTENT_REGION, "")
    }

    /// Regions in first-write order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .filter_map(|name| self.values.get(name).map(|v| (name.as_str(), v.as_str())))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Regions as template data
    pub fn to_data(&self) -> ViewData {
        self.iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    /// Store the composed view output
    pub(crate) fn set_content(&mut self, value: String) {
        self.put(CONTENT_REGION, value);
    }

    /// Write a region without the reserved-name check
    pub(crate) fn put(&mut self, region: &str, value: String) {
        if !self.values.contains_key(region) {
            self.order.push(region.to_string());
        }
        self.values.insert(region.to_string(), value);
    }
}
