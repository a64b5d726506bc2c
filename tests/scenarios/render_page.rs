//! Scenario: a site renders a page through its theme.

use serde_json::json;

use themekit::{FsViewRenderer, RenderKind, Theme, ThemeError, ThemeState, ViewData};

use crate::common::*;

fn data(value: serde_json::Value) -> ViewData {
    value.as_object().cloned().unwrap_or_default()
}

fn theme(env: &TestEnv) -> Theme<FsViewRenderer> {
    Theme::local(env.config(), FsViewRenderer::local(vec![env.path("views")]))
}

#[test]
fn themed_view_partial_and_assets_end_up_in_the_layout() {
    let env = TestEnv::with_default_theme();
    let mut theme = theme(&env);

    theme.theme("default").unwrap();
    theme.partial("header", &data(json!({"site": "Acme"}))).unwrap();
    theme
        .assets_mut()
        .default_container()
        .use_path()
        .script("app", "js/app.js", &[], &[]);
    theme.watch("home", &data(json!({"title": "Hello"})), RenderKind::View).unwrap();

    let html = theme.render().unwrap();

    assert_eq!(
        html,
        "<html><head></head><body><header>Acme</header>|<main>Hello</main>\
         <script src=\"/themes/default/assets/js/app.js\"></script>\n</body></html>"
    );
    assert_eq!(theme.state(), ThemeState::Rendered);
}

#[test]
fn watch_falls_back_to_application_views() {
    let env = TestEnv::with_default_theme();
    let mut theme = theme(&env);

    theme.theme("default").unwrap();
    theme.watch("about", &ViewData::new(), RenderKind::View).unwrap();

    assert_eq!(theme.content(), "<p>about us</p>");
    assert_eq!(theme.location(), Some("about"));
}

#[test]
fn theme_overlay_selects_another_layout() {
    let env = TestEnv::with_default_theme();
    env.write("public/themes/default/theme.toml", NIGHT_OVERLAY);
    env.write("public/themes/default/layouts/night.html", "night:{{ content | safe }}");
    let mut theme = theme(&env);

    theme.theme("default").unwrap();
    theme.scope("home", &data(json!({"title": "x"})), RenderKind::View).unwrap();

    assert_eq!(theme.layout_name(), "night");
    assert_eq!(theme.render().unwrap(), "night:<main>x</main>");
}

#[test]
fn inherited_theme_supplies_missing_views() {
    let env = TestEnv::with_default_theme();
    env.write("public/themes/child/theme.toml", "[theme]\ninherit = \"default\"\n");
    env.write("public/themes/child/layouts/default.html", "child:{{ content | safe }}");
    let mut theme = theme(&env);

    theme.theme("child").unwrap();
    theme.scope("home", &data(json!({"title": "base"})), RenderKind::View).unwrap();

    assert_eq!(theme.render().unwrap(), "child:<main>base</main>");
}

#[test]
fn unknown_theme_and_layout_are_errors() {
    let env = TestEnv::with_default_theme();
    let mut theme = theme(&env);

    assert!(matches!(
        theme.theme("missing").err(),
        Some(ThemeError::UnknownTheme { .. })
    ));

    theme.theme("default").unwrap().layout("gone");
    theme.watch("about", &ViewData::new(), RenderKind::View).unwrap();
    assert!(matches!(
        theme.render().unwrap_err(),
        ThemeError::UnknownLayout { .. }
    ));
}

#[test]
fn inline_template_is_sandboxed() {
    let env = TestEnv::with_default_theme();
    let mut theme = theme(&env);

    theme.theme("default").unwrap();
    theme
        .string("Hi {{ name }}", &data(json!({"name": "<b>"})), RenderKind::Blade)
        .unwrap();

    assert_eq!(theme.content(), "Hi &lt;b&gt;");
}
