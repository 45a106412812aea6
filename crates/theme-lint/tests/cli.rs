//! E2E tests for the `theme-lint` binary.

mod common;

use common::{pattern_ref, theme_lint_cmd, ThemeFixture};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

// ─── check ─────────────────────────────────────────────────────────

#[test]
fn clean_theme_succeeds() {
    let theme = ThemeFixture::new();
    theme
        .file("theme.json", "{}")
        .file("templates/index.html", "<main class=\"site\"></main>")
        .file("templates/single.html", &pattern_ref("theme/main"))
        .pattern("patterns/main.php", "theme/main", "<main></main>");

    theme_lint_cmd()
        .arg("check")
        .arg(theme.path())
        .assert()
        .success()
        .stderr(contains("0 required"))
        .stderr(contains("Skip links").not());
}

#[test]
fn missing_main_fails_with_required_message() {
    let theme = ThemeFixture::new();
    theme
        .file("theme.json", "{}")
        .file("templates/index.html", "<div></div>")
        .file("templates/404.html", "<p>Not found</p>");

    theme_lint_cmd()
        .arg("check")
        .arg(theme.path())
        .assert()
        .failure()
        .stderr(contains("[skip-links] REQUIRED Skip links are missing"))
        .stderr(contains("404.html, index.html"))
        .stderr(contains("1 required"));
}

#[test]
fn pattern_without_main_flags_template() {
    let theme = ThemeFixture::new();
    theme
        .file("templates/home.html", &pattern_ref("theme/hero"))
        .pattern("block-patterns/hero.php", "theme/hero", "<section></section>");

    theme_lint_cmd()
        .arg("check")
        .arg(theme.path())
        .assert()
        .failure()
        .stderr(contains("templates: home.html Please"));
}

#[test]
fn json_report_lists_files() {
    let theme = ThemeFixture::new();
    theme.file("templates/index.html", "<div></div>");

    theme_lint_cmd()
        .args(["check", "--format", "json"])
        .arg(theme.path())
        .assert()
        .failure()
        .stdout(contains("\"rule\": \"skip-links\""))
        .stdout(contains("\"severity\": \"required\""))
        .stdout(contains("\"index.html\""));
}

#[test]
fn severity_override_from_config_passes() {
    let theme = ThemeFixture::new();
    theme
        .file("templates/index.html", "<div></div>")
        .file(
            "theme-lint.toml",
            "[rules.skip-links]\nseverity = \"warning\"\n",
        );

    theme_lint_cmd()
        .arg("check")
        .arg(theme.path())
        .arg("--config")
        .arg(theme.path().join("theme-lint.toml"))
        .assert()
        .success()
        .stderr(contains("WARNING Skip links are missing"));
}

#[test]
fn disabled_rule_runs_nothing() {
    let theme = ThemeFixture::new();
    theme
        .file("templates/index.html", "<div></div>")
        .file("theme-lint.toml", "[rules.skip-links]\nenabled = false\n");

    theme_lint_cmd()
        .arg("check")
        .arg(theme.path())
        .arg("--config")
        .arg(theme.path().join("theme-lint.toml"))
        .assert()
        .success()
        .stderr(contains("from 0 check(s)"));
}

#[test]
fn broken_config_is_reported() {
    let theme = ThemeFixture::new();
    theme.file("theme-lint.toml", "[rules.skip-links]\nseverity = \"fatal\"\n");

    theme_lint_cmd()
        .arg("check")
        .arg(theme.path())
        .arg("--config")
        .arg(theme.path().join("theme-lint.toml"))
        .assert()
        .failure()
        .stderr(contains("Config error"));
}

#[test]
fn missing_theme_dir_fails() {
    let theme = ThemeFixture::new();

    theme_lint_cmd()
        .arg("check")
        .arg(theme.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(contains("not a directory"));
}

// ─── list-rules / init ─────────────────────────────────────────────

#[test]
fn list_rules_shows_skip_links() {
    theme_lint_cmd()
        .arg("list-rules")
        .assert()
        .success()
        .stderr(contains("skip-links"));
}

#[test]
fn init_writes_config_once() {
    let dir = tempfile::tempdir().expect("create temp dir");

    theme_lint_cmd()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stderr(contains("Created theme-lint.toml"));

    let written =
        std::fs::read_to_string(dir.path().join("theme-lint.toml")).expect("config written");
    assert!(written.contains("[rules.skip-links]"));

    theme_lint_cmd()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("already exists"));
}
