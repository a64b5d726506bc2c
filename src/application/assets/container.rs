//! Asset container
//!
//! A named set of scripts and styles. Registration order is kept per group;
//! re-registering a name replaces the asset in its original slot. Dependency
//! problems surface when the group is emitted, not when it is registered.

use tracing::debug;

use crate::domain::entities::Asset;
use crate::domain::services::arrange;
use crate::domain::services::inline_template::escape_html;
use crate::domain::value_objects::{is_url, AssetGroup, AssetSource, ContentHash};
use crate::error::ThemeResult;

use super::url::UrlResolver;

/// Name of the container used when none is given
pub const DEFAULT_CONTAINER: &str = "default";

/// Where theme assets live, relative to the public dir
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeAssetBase {
    pub theme_dir: String,
    pub theme: String,
    pub asset_dir: String,
}

impl ThemeAssetBase {
    /// `{theme_dir}/{theme}/{asset_dir}`
    pub fn path(&self) -> String {
        self.path_for(&self.theme)
    }

    /// Same layout for another theme
    pub fn path_for(&self, theme: &str) -> String {
        format!("{}/{}/{}", self.theme_dir, theme, self.asset_dir)
    }
}

/// One-shot request to prefix the next registered source
#[derive(Debug, Clone, PartialEq, Eq)]
enum UsePath {
    Off,
    Current,
    Theme(String),
}

#[derive(Debug, Clone)]
pub struct AssetContainer {
    name: String,
    base: Option<ThemeAssetBase>,
    urls: UrlResolver,
    scripts: Vec<Asset>,
    styles: Vec<Asset>,
    use_path: UsePath,
}

impl AssetContainer {
    pub fn new(name: impl Into<String>, base: Option<ThemeAssetBase>, urls: UrlResolver) -> Self {
        Self {
            name: name.into(),
            base,
            urls,
            scripts: Vec::new(),
            styles: Vec::new(),
            use_path: UsePath::Off,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Theme asset base path, without a trailing slash
    pub fn base_path(&self) -> String {
        self.base.as_ref().map(ThemeAssetBase::path).unwrap_or_default()
    }

    pub(crate) fn set_base(&mut self, base: Option<ThemeAssetBase>) {
        self.base = base;
    }

    pub(crate) fn set_urls(&mut self, urls: UrlResolver) {
        self.urls = urls;
    }

    /// Prefix the next `script`/`style` source with the theme asset path
    pub fn use_path(&mut self) -> &mut Self {
        self.use_path = UsePath::Current;
        self
    }

    /// Prefix the next `script`/`style` source with another theme's asset path
    pub fn use_theme_path(&mut self, theme: impl Into<String>) -> &mut Self {
        self.use_path = UsePath::Theme(theme.into());
        self
    }

    /// Register an asset, inferring the group from the extension
    pub fn add(
        &mut self,
        name: &str,
        source: &str,
        dependencies: &[&str],
        attributes: &[(&str, &str)],
    ) -> &mut Self {
        match AssetGroup::from_source(source) {
            AssetGroup::Style => self.style(name, source, dependencies, attributes),
            AssetGroup::Script => self.script(name, source, dependencies, attributes),
        }
    }

    /// Register several sources, each under `{name}-{hash of source}`
    pub fn add_many(
        &mut self,
        name: &str,
        sources: &[&str],
        dependencies: &[&str],
        attributes: &[(&str, &str)],
    ) -> &mut Self {
        for source in sources {
            let key = format!("{}-{}", name, ContentHash::from_content(source).short(12));
            self.add(&key, source, dependencies, attributes);
        }
        self
    }

    /// Register a script
    pub fn script(
        &mut self,
        name: &str,
        source: &str,
        dependencies: &[&str],
        attributes: &[(&str, &str)],
    ) -> &mut Self {
        let source = self.evaluate_path(source);
        let asset = Asset::new(name, AssetGroup::Script, source)
            .with_dependencies(dependencies.iter().copied())
            .with_attributes(attributes.iter().copied());
        self.register(asset)
    }

    /// Register a stylesheet; `media` defaults to `all`
    pub fn style(
        &mut self,
        name: &str,
        source: &str,
        dependencies: &[&str],
        attributes: &[(&str, &str)],
    ) -> &mut Self {
        let source = self.evaluate_path(source);
        let asset = Asset::new(name, AssetGroup::Style, source)
            .with_dependencies(dependencies.iter().copied())
            .with_attributes(attributes.iter().copied())
            .with_default_attribute("media", "all");
        self.register(asset)
    }

    /// Register inline JavaScript, wrapped in a `<script>` element
    pub fn write_script(&mut self, name: &str, script: &str, dependencies: &[&str]) -> &mut Self {
        let source = AssetSource::Inline(format!("<script>{script}</script>"));
        self.write(name, AssetGroup::Script, source, dependencies)
    }

    /// Register inline CSS, wrapped in a `<style>` element
    pub fn write_style(&mut self, name: &str, style: &str, dependencies: &[&str]) -> &mut Self {
        let source = AssetSource::Inline(format!("<style>{style}</style>"));
        self.write(name, AssetGroup::Style, source, dependencies)
    }

    /// Register raw markup in the script group
    pub fn write_content(&mut self, name: &str, markup: &str, dependencies: &[&str]) -> &mut Self {
        let source = AssetSource::Inline(markup.to_string());
        self.write(name, AssetGroup::Script, source, dependencies)
    }

    fn write(
        &mut self,
        name: &str,
        group: AssetGroup,
        source: AssetSource,
        dependencies: &[&str],
    ) -> &mut Self {
        let asset = Asset::new(name, group, source).with_dependencies(dependencies.iter().copied());
        self.register(asset)
    }

    fn evaluate_path(&mut self, source: &str) -> String {
        let use_path = std::mem::replace(&mut self.use_path, UsePath::Off);
        let prefix = match (&use_path, &self.base) {
            (UsePath::Off, _) | (_, None) => return source.to_string(),
            (UsePath::Current, Some(base)) => base.path(),
            (UsePath::Theme(theme), Some(base)) => base.path_for(theme),
        };
        format!("{}/{}", prefix, source.trim_start_matches('/'))
    }

    fn register(&mut self, asset: Asset) -> &mut Self {
        debug!(
            container = %self.name,
            group = %asset.group(),
            name = asset.name(),
            "registered asset"
        );
        let group = self.group_mut(asset.group());
        match group.iter_mut().find(|a| a.name() == asset.name()) {
            Some(existing) => *existing = asset,
            None => group.push(asset),
        }
        self
    }

    fn group_mut(&mut self, group: AssetGroup) -> &mut Vec<Asset> {
        match group {
            AssetGroup::Script => &mut self.scripts,
            AssetGroup::Style => &mut self.styles,
        }
    }

    /// Assets of a group in registration order
    pub fn assets(&self, group: AssetGroup) -> &[Asset] {
        match group {
            AssetGroup::Script => &self.scripts,
            AssetGroup::Style => &self.styles,
        }
    }

    /// Assets of a group in dependency order
    pub fn arranged(&self, group: AssetGroup) -> ThemeResult<Vec<Asset>> {
        arrange(self.assets(group))
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.styles.is_empty()
    }

    /// URL of a path under the theme asset base; absolute URLs untouched
    pub fn url(&self, uri: &str) -> String {
        if uri.starts_with("http") || is_url(uri) {
            return uri.to_string();
        }
        let base = self.base_path();
        if base.is_empty() {
            return self.urls.to(uri);
        }
        self.urls.to(&format!("{}/{}", base, uri.trim_start_matches('/')))
    }

    /// URL of a public-relative path, without the theme prefix
    pub fn origin_url(&self, uri: &str) -> String {
        self.urls.to(uri)
    }

    pub fn urls(&self) -> &UrlResolver {
        &self.urls
    }

    /// `<script>` tags for every script, in dependency order
    pub fn scripts(&self) -> ThemeResult<String> {
        self.group_html(AssetGroup::Script)
    }

    /// `<link>` tags for every stylesheet, in dependency order
    pub fn styles(&self) -> ThemeResult<String> {
        self.group_html(AssetGroup::Style)
    }

    fn group_html(&self, group: AssetGroup) -> ThemeResult<String> {
        let mut html = String::new();
        for asset in self.arranged(group)? {
            match asset.source() {
                AssetSource::Inline(markup) => html.push_str(markup),
                source => {
                    let url = self.urls.to(source.as_str());
                    html.push_str(&tag(group, &url, asset.attributes()));
                }
            }
        }
        Ok(html)
    }
}

/// HTML element for a group pointing at `url`, followed by a newline
pub fn tag(group: AssetGroup, url: &str, attributes: &[(String, String)]) -> String {
    match group {
        AssetGroup::Script => {
            let mut attrs = attributes.to_vec();
            attrs.push(("src".to_string(), url.to_string()));
            format!("<script{}></script>\n", render_attributes(&attrs))
        }
        AssetGroup::Style => {
            let mut attrs = attributes.to_vec();
            for (key, value) in [("media", "all"), ("type", "text/css"), ("rel", "stylesheet")] {
                if !attrs.iter().any(|(k, _)| k == key) {
                    attrs.push((key.to_string(), value.to_string()));
                }
            }
            attrs.push(("href".to_string(), url.to_string()));
            format!("<link{}>\n", render_attributes(&attrs))
        }
    }
}

/// ` key="value"` pairs; an empty value renders the bare key
fn render_attributes(attributes: &[(String, String)]) -> String {
    attributes
        .iter()
        .map(|(key, value)| {
            if value.is_empty() {
                format!(" {key}")
            } else {
                format!(" {}=\"{}\"", key, escape_html(value))
            }
        })
        .collect()
}
