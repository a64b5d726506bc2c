//! Breadcrumb trail for the current page.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::domain::ports::ViewData;
use crate::domain::services::{render_twig, TemplateError};

/// Tags a crumb label may keep.
const ALLOWED_TAGS: &[&str] = &["i", "b", "strong"];

/// Default trail markup (schema.org BreadcrumbList).
pub const DEFAULT_TEMPLATE: &str = r#"<ul class="breadcrumb" itemscope itemtype="http://schema.org/BreadcrumbList">
{%- for crumb in crumbs %}
{%- if not loop.last %}
<li itemprop="itemListElement" itemscope itemtype="http://schema.org/ListItem">
<meta itemprop="position" content="{{ loop.index }}" />
<a href="{{ crumb.url }}" itemprop="item" title="{{ crumb.label }}">{{ crumb.label | safe }}<meta itemprop="name" content="{{ crumb.label }}" /></a>
<span class="divider">/</span>
</li>
{%- else %}
<li class="active">{{ crumb.label | safe }}</li>
{%- endif %}
{%- endfor %}
</ul>"#;

/// One step of the trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    pub url: String,
}

/// Ordered list of crumbs with a template to render them
#[derive(Debug, Clone)]
pub struct Breadcrumb {
    crumbs: Vec<Crumb>,
    template: String,
    base_url: String,
}

impl Default for Breadcrumb {
    fn default() -> Self {
        Self::new("")
    }
}

impl Breadcrumb {
    /// Create an empty trail; relative crumb URLs are resolved against
    /// `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            crumbs: Vec::new(),
            template: DEFAULT_TEMPLATE.to_string(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Add a crumb. The label keeps only `<i>`, `<b>` and `<strong>` tags.
    pub fn add(&mut self, label: &str, url: &str) -> &mut Self {
        let label = strip_tags(label).trim().to_string();
        let url = self.absolute(url);
        self.crumbs.push(Crumb { label, url });
        self
    }

    /// Add several `(label, url)` pairs
    pub fn add_many<'a, I>(&mut self, crumbs: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (label, url) in crumbs {
            self.add(label, url);
        }
        self
    }

    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    /// Replace the trail template (twig syntax, `crumbs` in scope)
    pub fn set_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.template = template.into();
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render the trail
    pub fn render(&self) -> Result<String, TemplateError> {
        let crumbs = self
            .crumbs
            .iter()
            .map(|c| serde_json::to_value(c).unwrap_or(Value::Null))
            .collect();
        let mut data = ViewData::new();
        data.insert("crumbs".to_string(), Value::Array(crumbs));
        render_twig(&self.template, &data)
    }

    fn absolute(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        format!("{}/{}", self.base_url, url.trim_start_matches('/'))
    }
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"</?([A-Za-z][A-Za-z0-9]*)\b[^>]*>").expect("tag pattern compiles")
    })
}

/// Remove every HTML tag except the allowed inline ones.
pub fn strip_tags(input: &str) -> String {
    tag_pattern()
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let name = caps[1].to_ascii_lowercase();
            if ALLOWED_TAGS.contains(&name.as_str()) {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}
