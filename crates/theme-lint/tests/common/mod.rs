//! Shared helpers for `theme-lint` binary tests.

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const TIMEOUT: Duration = Duration::from_secs(10);

/// `theme-lint` command with logging env cleared.
pub fn theme_lint_cmd() -> assert_cmd::Command {
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("theme-lint");
    cmd.timeout(TIMEOUT);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Theme directory in a tempdir. Keep it alive for the test's duration.
pub struct ThemeFixture {
    dir: tempfile::TempDir,
}

impl ThemeFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir for theme"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, relative: &str, contents: &str) -> &Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("fixture path has parent")).expect("mkdir");
        fs::write(path, contents).expect("write fixture file");
        self
    }

    pub fn pattern(&self, relative: &str, slug: &str, body: &str) -> &Self {
        self.file(
            relative,
            &format!("<?php\n/**\n * Title: Fixture\n * Slug: {slug}\n */\n?>\n{body}\n"),
        )
    }
}

pub fn pattern_ref(slug: &str) -> String {
    format!("<!-- wp:pattern {{\"slug\":\"{slug}\"}} /-->")
}
