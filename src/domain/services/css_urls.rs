//! Rewriting of relative `url(...)` references in stylesheets.
//!
//! A stylesheet moved into the compressed cache directory no longer sits next
//! to the images and fonts it references. Every relative reference is resolved
//! against the stylesheet's own directory and turned into a public URL.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::domain::value_objects::is_url;

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"url\(\s*(?:'([^']*)'|"([^"]*)"|([^)'"]*?))\s*\)"#)
            .expect("url() pattern compiles")
    })
}

/// Rewrite the relative `url()` references of `css`.
///
/// `stylesheet` is the public-relative path of the stylesheet the CSS came
/// from. `resolve` turns a public-relative path into a public URL.
pub fn rewrite_css_urls<F>(css: &str, stylesheet: &str, resolve: F) -> String
where
    F: Fn(&str) -> String,
{
    let base = match stylesheet.rfind('/') {
        Some(idx) => &stylesheet[..idx],
        None => "",
    };

    url_pattern()
        .replace_all(css, |caps: &Captures<'_>| {
            let (value, quote) = if let Some(m) = caps.get(1) {
                (m.as_str(), "'")
            } else if let Some(m) = caps.get(2) {
                (m.as_str(), "\"")
            } else {
                (caps.get(3).map_or("", |m| m.as_str()), "")
            };

            if is_absolute_reference(value) {
                return caps[0].to_string();
            }

            let resolved = resolve(&normalize_path(base, value));
            format!("url({quote}{resolved}{quote})")
        })
        .into_owned()
}

/// References left untouched: empty, absolute or protocol-relative URLs,
/// `data:` URIs, root-relative paths and fragments.
fn is_absolute_reference(value: &str) -> bool {
    value.is_empty()
        || value.starts_with('/')
        || value.starts_with('#')
        || value.starts_with("data:")
        || is_url(value)
        || has_scheme(value)
}

fn has_scheme(value: &str) -> bool {
    match value.find(':') {
        Some(idx) if idx > 0 => value[..idx]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
        _ => false,
    }
}

/// Join `relative` onto `base` and fold `.` and `..` segments.
///
/// `..` segments that would climb above the root are dropped. Any query or
/// fragment on `relative` is kept as is.
pub fn normalize_path(base: &str, relative: &str) -> String {
    let split = relative.find(['?', '#']).unwrap_or(relative.len());
    let (path, suffix) = relative.split_at(split);

    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(path.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    format!("{}{}", segments.join("/"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn public(path: &str) -> String {
        format!("http://cdn.test/{path}")
    }

    #[test]
    fn rewrites_relative_reference() {
        let css = ".logo { background: url(../img/logo.png) }";
        let output = rewrite_css_urls(css, "themes/default/assets/css/app.css", public);
        assert_eq!(
            output,
            ".logo { background: url(http://cdn.test/themes/default/assets/img/logo.png) }"
        );
    }

    #[test]
    fn keeps_quotes() {
        let css = "a{b:url('fonts/x.woff')} c{d:url( \"./y.svg#icon\" )}";
        let output = rewrite_css_urls(css, "assets/css/app.css", public);
        assert_eq!(
            output,
            "a{b:url('http://cdn.test/assets/css/fonts/x.woff')} c{d:url(\"http://cdn.test/assets/css/y.svg#icon\")}"
        );
    }

    #[test]
    fn leaves_absolute_references() {
        let css = "a{b:url(http://x.test/a.png)} c{d:url(//x.test/b.png)} \
                   e{f:url(data:image/png;base64,AAAA)} g{h:url(/root.png)} i{j:url(#frag)}";
        let output = rewrite_css_urls(css, "assets/css/app.css", public);
        assert_eq!(output, css);
    }

    #[test]
    fn normalize_folds_dot_segments() {
        assert_eq!(normalize_path("a/b/c", "../d/./e.png"), "a/b/d/e.png");
        assert_eq!(normalize_path("a", "../../x.png"), "x.png");
        assert_eq!(normalize_path("", "img/x.png?v=2"), "img/x.png?v=2");
    }

    #[test]
    fn stylesheet_without_directory() {
        let output = rewrite_css_urls("a{b:url(x.png)}", "app.css", public);
        assert_eq!(output, "a{b:url(http://cdn.test/x.png)}");
    }
}
