//! Configuration precedence: `--public` > environment > project file > defaults

use insta::assert_snapshot;

use crate::common::*;

#[test]
fn contract_default_config_output() {
    let env = TestEnv::new();
    let result = env.run(&["config"]);

    assert!(result.success, "config failed: {}", result.stderr);
    assert_snapshot!(result.stdout, @r#"
    [theme]
    dir = "themes"
    default = "default"
    layout = "default"

    [containers]
    layout = "layouts"
    asset = "assets"
    partial = "partials"
    widget = "widgets"
    view = "views"

    [assets]
    compress_dir = "cache"
    force_compress = false

    [app]
    public_dir = "public"
    "#);
}

#[test]
fn contract_project_file_is_discovered_from_subdirectories() {
    let env = TestEnv::new();
    env.write("themekit.toml", "[theme]\ndefault = \"dark\"\n");
    env.write("src/app/.keep", "");

    let result = env.run_from(&env.path("src/app"), &["--json", "config"]);

    assert!(result.success, "config failed: {}", result.stderr);
    let config: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(config["theme"]["default"], "dark");
}

#[test]
fn contract_theme_overlay_wins_per_key() {
    let env = TestEnv::new();
    env.write("themekit.toml", "[theme]\nlayout = \"wide\"\ndir = \"skins\"\n");
    env.write("public/skins/dark/theme.toml", NIGHT_OVERLAY);

    let result = env.run(&["--json", "config", "-t", "dark"]);

    assert!(result.success, "config failed: {}", result.stderr);
    let config: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(config["theme"]["layout"], "night");
    assert_eq!(config["theme"]["dir"], "skins");
}

#[test]
fn contract_environment_overrides_project_file() {
    let env = TestEnv::new();
    env.write("themekit.toml", "[assets]\ncompress_dir = \"built\"\n");

    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_themekit"));
    let output = cmd
        .current_dir(env.root.path())
        .args(["--json", "config"])
        .env("HOME", env.home.path())
        .env("XDG_CONFIG_HOME", env.home.path().join(".config"))
        .env("THEMEKIT_COMPRESS_DIR", "min")
        .output()
        .unwrap();

    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["assets"]["compress_dir"], "min");
}

#[test]
fn contract_public_flag_wins() {
    let env = TestEnv::new();
    env.write("themekit.toml", "[app]\npublic_dir = \"www\"\n");

    let result = env.run(&["--json", "--public", "htdocs", "config"]);

    let config: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(config["app"]["public_dir"], "htdocs");
}

#[test]
fn contract_unknown_keys_warn_with_suggestion() {
    let env = TestEnv::new();
    env.write("themekit.toml", "[theme]\nlayuot = \"x\"\n");

    let result = env.run(&["config"]);

    assert!(result.success, "config failed: {}", result.stderr);
    assert!(result.stderr.contains("layuot"), "{}", result.stderr);
    assert!(result.stderr.contains("layout"), "{}", result.stderr);
}
