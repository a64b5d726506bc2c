//! Domain Services
//!
//! Pure logic over domain entities: dependency ordering, minification,
//! stylesheet URL rewriting and sandboxed inline templates. Nothing here
//! touches the file system.

mod arranger;
pub mod css_urls;
pub mod inline_template;
pub mod minify;

pub use arranger::arrange;
pub use css_urls::{normalize_path, rewrite_css_urls};
pub use inline_template::{render_blade, render_twig, TemplateError};
pub use minify::{minify, minify_css, minify_js};
