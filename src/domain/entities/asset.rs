//! Asset entity - one registered script or stylesheet
//!
//! Assets are registered into a container under a name that is unique
//! within their group. Dependencies name other assets of the same group.

use crate::domain::value_objects::{AssetGroup, AssetSource};

/// A registered asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Unique key within the group
    name: String,
    /// Script or style
    group: AssetGroup,
    /// Path, URL or inline markup
    source: AssetSource,
    /// Names of assets (same group) that must be emitted first
    dependencies: Vec<String>,
    /// HTML attributes, in registration order, opaque to the resolver
    attributes: Vec<(String, String)>,
}

impl Asset {
    /// Create a new Asset with no dependencies or attributes
    pub fn new(
        name: impl Into<String>,
        group: AssetGroup,
        source: impl Into<AssetSource>,
    ) -> Self {
        Self {
            name: name.into(),
            group,
            source: source.into(),
            dependencies: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Builder: set the dependencies
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the attributes
    pub fn with_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Set an attribute unless it is already present
    pub fn with_default_attribute(mut self, key: &str, value: &str) -> Self {
        if self.attribute(key).is_none() {
            self.attributes.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> AssetGroup {
        self.group
    }

    pub fn source(&self) -> &AssetSource {
        &self.source
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Look up a single attribute
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether this asset lists `name` as a dependency
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d == name)
    }
}
