//! Test fixtures - reusable templates and config snippets.

/// Default layout printing every region the tests care about
pub const LAYOUT: &str = "<html><head>{{ assets.default.styles | safe }}</head>\
<body>{{ header | default(value='') | safe }}|{{ content | safe }}\
{{ assets.default.scripts | safe }}</body></html>";

/// Layout that only prints the compressed queue
pub const QUEUE_LAYOUT: &str = "{{ queues.footer.scripts | safe }}{{ queues.footer.styles | safe }}";

pub const THEMED_HOME: &str = "<main>{{ title }}</main>";

pub const GLOBAL_ABOUT: &str = "<p>about {{ who | default(value='us') }}</p>";

pub const HEADER: &str = "<header>{{ site }}</header>";

/// Theme overlay switching the default layout
pub const NIGHT_OVERLAY: &str = r#"[theme]
layout = "night"
"#;

/// Manifest whose registration order differs from dependency order
pub const MANIFEST: &str = r#"
[[script]]
name = "app"
source = "js/app.js"
dependencies = ["jquery"]

[[script]]
name = "jquery"
source = "js/jquery.js"

[[style]]
name = "site"
source = "css/site.css"
"#;
