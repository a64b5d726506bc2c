//! Scenario: a queue is flattened into one cached, minified file per group.

use themekit::{FsViewRenderer, RenderKind, Theme, ViewData};

use crate::common::*;

fn site() -> TestEnv {
    let env = TestEnv::with_default_theme();
    env.write("public/themes/default/layouts/queue.html", QUEUE_LAYOUT);
    env.write("public/js/jquery.js", "window.$ = function () { return 1; };\n");
    env.write("public/js/app.js", "// boot\n$( 'body' );\n");
    env.write("public/themes/default/assets/css/site.css", "body { background: url(../img/bg.png); }\n");
    env
}

fn render(env: &TestEnv) -> String {
    let mut theme = Theme::local(env.config(), FsViewRenderer::local(vec![env.path("views")]));
    theme.theme("default").unwrap().layout("queue");

    let queue = theme.assets_mut().queue("footer");
    queue.script("app", "js/app.js", &["jquery"], &[]);
    queue.script("jquery", "js/jquery.js", &[], &[]);
    queue.use_path().style("site", "css/site.css", &[], &[]);

    theme.watch("about", &ViewData::new(), RenderKind::View).unwrap();
    theme.render().unwrap()
}

fn artifact(html: &str, attribute: &str) -> String {
    let start = html.find(attribute).expect("attribute present") + attribute.len();
    let end = start + html[start..].find('"').expect("closing quote");
    html[start..end].trim_start_matches('/').to_string()
}

#[test]
fn queue_renders_one_tag_per_group() {
    let env = site();
    let html = render(&env);

    assert_eq!(html.matches("<script").count(), 1);
    assert_eq!(html.matches("<link").count(), 1);

    let script = artifact(&html, "src=\"");
    assert!(script.starts_with("cache/") && script.ends_with(".min.js"), "{script}");
    assert_eq!(
        env.read(&format!("public/{script}")),
        "window.$=function(){return 1;};$('body');"
    );
}

#[test]
fn stylesheet_urls_point_at_the_theme() {
    let env = site();
    let html = render(&env);

    let style = artifact(&html, "href=\"");
    assert_eq!(
        env.read(&format!("public/{style}")),
        "body{background:url(/themes/default/assets/img/bg.png)}"
    );
}

#[test]
fn second_render_reuses_the_cache() {
    let env = site();
    let first = render(&env);
    let script = artifact(&first, "src=\"");
    let path = env.path(&format!("public/{script}"));
    let written = std::fs::metadata(&path).unwrap().modified().unwrap();

    let second = render(&env);

    assert_eq!(first, second);
    assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), written);
}
