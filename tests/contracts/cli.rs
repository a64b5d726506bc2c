//! `render` and `assets` subcommands

use crate::common::*;

#[test]
fn contract_render_prints_the_layout() {
    let env = TestEnv::with_default_theme();
    let result = env.run(&["render", "home", "--data", r#"{"title":"Hi"}"#]);

    assert!(result.success, "render failed: {}", result.stderr);
    assert_eq!(
        result.stdout,
        "<html><head></head><body>|<main>Hi</main></body></html>\n"
    );
}

#[test]
fn contract_render_scope_skips_application_views() {
    let env = TestEnv::with_default_theme();
    let result = env.run(&["render", "about", "--scope"]);

    assert!(!result.success);
    assert!(result.stderr.contains("view [theme.default::views.about] not found"), "{}", result.stderr);
}

#[test]
fn contract_render_unknown_theme_fails() {
    let env = TestEnv::with_default_theme();
    let result = env.run(&["render", "home", "-t", "nope"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("theme [nope] not found"), "{}", result.stderr);
}

#[test]
fn contract_render_rejects_non_object_data() {
    let env = TestEnv::with_default_theme();
    let result = env.run(&["render", "home", "--data", "[1]"]);

    assert!(!result.success);
    assert!(result.stderr.contains("--data must be a JSON object"), "{}", result.stderr);
}

#[test]
fn contract_assets_prints_dependency_order() {
    let env = TestEnv::new();
    env.write("assets.toml", MANIFEST);
    let result = env.run(&["assets", "assets.toml"]);

    assert!(result.success, "assets failed: {}", result.stderr);
    assert_eq!(result.stdout, "script: jquery, app\nstyle: site\n");
}

#[test]
fn contract_assets_json_order() {
    let env = TestEnv::new();
    env.write("assets.toml", MANIFEST);
    let result = env.run(&["--json", "assets", "assets.toml"]);

    assert!(result.success, "assets failed: {}", result.stderr);
    let order: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(order["script"], serde_json::json!(["jquery", "app"]));
    assert_eq!(order["style"], serde_json::json!(["site"]));
}

#[test]
fn contract_assets_compress_writes_cache() {
    let env = TestEnv::new();
    env.write("assets.toml", MANIFEST);
    env.write("public/js/jquery.js", "var $ = 1;\n");
    env.write("public/js/app.js", "$ ( 1 );\n");
    env.write("public/css/site.css", "a { color : red ; }\n");

    let result = env.run(&["assets", "assets.toml", "--compress"]);
    assert!(result.success, "compress failed: {}", result.stderr);

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{}", result.stdout);
    assert!(lines[0].starts_with("<script src=\"/cache/"));
    assert!(lines[1].starts_with("<link media=\"all\""));

    let src = lines[0]
        .trim_start_matches("<script src=\"/")
        .trim_end_matches("\"></script>");
    assert_eq!(env.read(&format!("public/{src}")), "var $=1;$(1);");
}

#[test]
fn contract_force_requires_compress() {
    let env = TestEnv::new();
    env.write("assets.toml", MANIFEST);
    let result = env.run(&["assets", "assets.toml", "--force"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 2);
}
