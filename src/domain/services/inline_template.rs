//! Sandboxed inline string templates
//!
//! Two syntaxes are supported for templates passed as strings rather than
//! view names. Neither executes code:
//!
//! - **Blade-style**: `{{ $name }}` (escaped), `{!! $name !!}` (raw),
//!   `{{-- comment --}}`, `@{{ literal }}`, dotted paths (`{{ $user.name }}`)
//!   and a literal fallback (`{{ $title or 'Home' }}`). Server-script
//!   openers are escaped before compiling.
//! - **Twig-style**: rendered by tera in one-off mode with autoescape.

use serde_json::Value;

use crate::domain::ports::ViewData;

/// Inline template failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TemplateError {
    pub message: String,
}

impl TemplateError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Render a blade-style template string.
pub fn render_blade(template: &str, data: &ViewData) -> Result<String, TemplateError> {
    let source = escape_server_script(template);
    let mut out = String::with_capacity(source.len());
    let mut rest = source.as_str();

    while let Some(start) = rest.find(['{', '@']) {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        if let Some(after) = rest.strip_prefix("@{{") {
            out.push_str("{{");
            rest = after;
        } else if let Some(after) = rest.strip_prefix("{{--") {
            let end = after
                .find("--}}")
                .ok_or_else(|| TemplateError::new("unclosed comment '{{--'"))?;
            rest = &after[end + 4..];
        } else if let Some(after) = rest.strip_prefix("{!!") {
            let end = after
                .find("!!}")
                .ok_or_else(|| TemplateError::new("unclosed raw echo '{!!'"))?;
            out.push_str(&evaluate(&after[..end], data));
            rest = &after[end + 3..];
        } else if let Some(after) = rest.strip_prefix("{{") {
            let end = after
                .find("}}")
                .ok_or_else(|| TemplateError::new("unclosed echo '{{'"))?;
            out.push_str(&escape_html(&evaluate(&after[..end], data)));
            rest = &after[end + 2..];
        } else {
            let ch = rest.chars().next().unwrap_or_default();
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Render a twig-style template string with tera.
pub fn render_twig(template: &str, data: &ViewData) -> Result<String, TemplateError> {
    let context = tera::Context::from_value(Value::Object(data.clone()))
        .map_err(|e| TemplateError::new(describe_tera_error(&e)))?;
    tera::Tera::one_off(template, &context, true)
        .map_err(|e| TemplateError::new(describe_tera_error(&e)))
}

/// Flatten a tera error and its sources into one line.
pub fn describe_tera_error(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

/// Escape `& < > " '` for HTML output.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a JSON value the way an echo prints it.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Look up a dotted path (`user.name`, `items.0`) in template data.
pub fn lookup<'a>(data: &'a ViewData, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = data.get(segments.next()?)?;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn evaluate(expression: &str, data: &ViewData) -> String {
    let (path, fallback) = match expression.split_once(" or ") {
        Some((path, fallback)) => (path, Some(fallback.trim())),
        None => (expression, None),
    };
    let path = path.trim().trim_start_matches('$');

    if let Some(literal) = quoted(path) {
        return literal.to_string();
    }

    match lookup(data, path) {
        Some(value) if !value.is_null() => display_value(value),
        _ => fallback
            .map(|f| quoted(f).unwrap_or(f).to_string())
            .unwrap_or_default(),
    }
}

fn quoted(value: &str) -> Option<&str> {
    let value = value.trim();
    ['\'', '"'].iter().find_map(|q| {
        value
            .strip_prefix(*q)
            .and_then(|v| v.strip_suffix(*q))
    })
}

fn escape_server_script(template: &str) -> String {
    template
        .replace("<?", "&lt;?")
        .replace("<%", "&lt;%")
        .replace("?>", "?&gt;")
        .replace("%>", "%&gt;")
}
