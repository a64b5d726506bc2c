//! Test environment for themekit.
//!
//! `TestEnv` owns a temporary site directory (`public/`, `views/`,
//! `themekit.toml`) and a separate home so user config never leaks in.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use themekit::config::{Config, PROJECT_CONFIG_FILE};

/// Result of running the themekit binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub root: TempDir,
    pub home: TempDir,
}

impl TestEnv {
    /// Empty site with a project config file
    pub fn new() -> Self {
        let env = Self {
            root: tempfile::tempdir().expect("create site dir"),
            home: tempfile::tempdir().expect("create home dir"),
        };
        env.write(PROJECT_CONFIG_FILE, "");
        env
    }

    /// Site with the `default` theme and a global view
    pub fn with_default_theme() -> Self {
        let env = Self::new();
        env.write("public/themes/default/layouts/default.html", super::LAYOUT);
        env.write("public/themes/default/views/home.html", super::THEMED_HOME);
        env.write("public/themes/default/partials/header.html", super::HEADER);
        env.write("views/about.html", super::GLOBAL_ABOUT);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    /// Config rooted in this site, with absolute public dir
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.app.public_dir = self.path("public");
        config
    }

    /// Run the binary from the site root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_themekit"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env_remove("THEMEKIT_LOG")
            .env_remove("THEMEKIT_THEME_DIR")
            .env_remove("THEMEKIT_FORCE_COMPRESS")
            .env_remove("THEMEKIT_ASSET_URL")
            .env_remove("THEMEKIT_COMPRESS_DIR");

        let output = cmd.output().expect("failed to execute themekit");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
