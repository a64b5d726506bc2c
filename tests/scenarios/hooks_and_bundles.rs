//! Scenario: listeners and deferred asset bundles shape the page.

use std::cell::RefCell;
use std::rc::Rc;

use themekit::{FsViewRenderer, RenderKind, Theme, ThemeEvent, ThemeResult, ViewData};

use crate::common::*;

type SiteTheme = Theme<FsViewRenderer>;

fn theme(env: &TestEnv) -> SiteTheme {
    Theme::local(env.config(), FsViewRenderer::local(vec![env.path("views")]))
}

#[test]
fn events_fire_in_render_order() {
    let env = TestEnv::with_default_theme();
    let mut theme = theme(&env);
    let seen = Rc::new(RefCell::new(Vec::new()));

    for event in [
        ThemeEvent::After,
        ThemeEvent::BeforeRenderLayout("default".to_string()),
        ThemeEvent::BeforeRenderTheme,
        ThemeEvent::Asset,
        ThemeEvent::AfterThemeSelect,
        ThemeEvent::Before,
    ] {
        let seen = Rc::clone(&seen);
        let label = event.to_string();
        theme.on(event, move |_: &mut SiteTheme| -> ThemeResult<()> {
            seen.borrow_mut().push(label.clone());
            Ok(())
        });
    }

    theme.theme("default").unwrap();
    theme.watch("about", &ViewData::new(), RenderKind::View).unwrap();
    theme.render().unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            "before",
            "afterThemeSelect",
            "asset",
            "beforeRenderTheme",
            "beforeRenderLayout.default",
            "after",
        ]
    );
}

#[test]
fn asset_hook_registers_theme_scripts() {
    let env = TestEnv::with_default_theme();
    let mut theme = theme(&env);

    theme.on(ThemeEvent::Asset, |t: &mut SiteTheme| -> ThemeResult<()> {
        t.assets_mut()
            .default_container()
            .use_path()
            .script("theme", "js/theme.js", &[], &[]);
        Ok(())
    });

    theme.theme("default").unwrap();
    theme.watch("about", &ViewData::new(), RenderKind::View).unwrap();
    let html = theme.render().unwrap();

    assert!(
        html.contains("<script src=\"/themes/default/assets/js/theme.js\"></script>"),
        "{html}"
    );
}

#[test]
fn served_bundle_is_cooked_once() {
    let env = TestEnv::with_default_theme();
    let mut theme = theme(&env);
    let runs = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&runs);
    theme.assets_mut().cook("jquery", move |assets| {
        *counter.borrow_mut() += 1;
        assets
            .default_container()
            .script("jquery", "js/jquery.js", &[], &[]);
    });
    theme.assets_mut().serve("jquery").serve("jquery");

    theme.theme("default").unwrap();
    theme.watch("about", &ViewData::new(), RenderKind::View).unwrap();
    let first = theme.render().unwrap();

    theme.watch("about", &ViewData::new(), RenderKind::View).unwrap();
    let second = theme.render().unwrap();

    assert_eq!(*runs.borrow(), 1);
    assert_eq!(first.matches("js/jquery.js").count(), 1);
    assert_eq!(second, first);
    assert!(!theme.assets().is_cooked("jquery"));
}

#[test]
fn hook_error_stops_the_render() {
    let env = TestEnv::with_default_theme();
    let mut theme = theme(&env);

    theme.on(ThemeEvent::After, |_: &mut SiteTheme| -> ThemeResult<()> {
        Err(themekit::ThemeError::NothingToRender)
    });

    theme.theme("default").unwrap();
    theme.watch("about", &ViewData::new(), RenderKind::View).unwrap();
    assert!(theme.render().is_err());
}
