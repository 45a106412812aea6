use crate::check::{FileMap, ThemeCheck};
use crate::context::ThemeContext;
use crate::types::{Severity, Violation};
use regex::bytes::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

pub const NAME: &str = "skip-links";

pub const DESCRIPTION: &str =
    "templates/*.html must contain a <main> tag, directly or through every referenced pattern";

/// Loose on purpose: also matches `<main class=...>` and occurrences inside comments.
const MAIN_TAG: &[u8] = b"<main";

const TEMPLATE_DIR: &str = "templates";

/// Searched in order; the first one that is a directory wins.
const PATTERN_DIRS: [&str; 2] = ["patterns", "block-patterns"];

static PATTERN_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!-- wp:pattern \{"slug":"((?-u:[^"])+)"\} /-->"#)
        .expect("pattern reference regex is valid")
});

/// Checks that every block template exposes a `<main>` landmark for skip links.
#[derive(Debug)]
pub struct SkipLinksCheck {
    pub severity: Severity,
    theme: Option<ThemeContext>,
    is_block_theme: bool,
    violations: Vec<Violation>,
}

impl Default for SkipLinksCheck {
    fn default() -> Self {
        Self {
            severity: Severity::Required,
            theme: None,
            is_block_theme: false,
            violations: Vec::new(),
        }
    }
}

impl SkipLinksCheck {
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Cached by [`ThemeCheck::set_context`].
    #[must_use]
    pub fn is_block_theme(&self) -> bool {
        self.is_block_theme
    }

    fn root(&self) -> Option<&Path> {
        self.theme.as_ref().map(ThemeContext::root)
    }

    /// Basenames of templates without a qualifying `<main>` tag, in scan order.
    /// A template is listed once per failing pattern reference.
    fn templates_without_main_tag(&self) -> Vec<String> {
        let Some(root) = self.root() else {
            debug!("No theme context set, skipping template scan");
            return Vec::new();
        };

        let mut missing = Vec::new();

        for path in glob_files(&root.join(TEMPLATE_DIR), "*.html") {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let contents = read_or_empty(&path);

            if has_main_tag(&contents) {
                continue;
            }

            match template_has_patterns(&contents) {
                Some(slugs) => {
                    for slug in &slugs {
                        if !self.pattern_has_tag(slug) {
                            debug!("{file_name}: pattern `{slug}` has no <main> tag");
                            missing.push(file_name.clone());
                        }
                    }
                }
                None => missing.push(file_name),
            }
        }

        missing
    }

    /// Whether the pattern declaring `slug` contains a `<main` tag.
    ///
    /// When several pattern files declare the same slug, the last one in
    /// directory order decides. Unknown slugs and missing pattern
    /// directories count as "no tag".
    #[must_use]
    pub fn pattern_has_tag(&self, slug: &str) -> bool {
        let Some(root) = self.root() else {
            return false;
        };

        let Some(dir) = PATTERN_DIRS
            .iter()
            .map(|d| root.join(d))
            .find(|d| d.is_dir())
        else {
            debug!("No pattern directory found for slug `{slug}`");
            return false;
        };

        // ASCII word boundary: a non-ASCII byte right after the slug ends it.
        let header = format!(r"\* Slug: {}(?-u:\b)", regex::escape(slug));
        let slug_header = match Regex::new(&header) {
            Ok(re) => re,
            Err(e) => {
                warn!("Cannot build slug matcher for `{slug}`: {e}");
                return false;
            }
        };

        let mut has_tag = false;
        for path in glob_files(&dir, "*.php") {
            if !path.is_file() {
                continue;
            }
            let contents = read_or_empty(&path);
            if slug_header.is_match(&contents) {
                has_tag = has_main_tag(&contents);
            }
        }

        has_tag
    }
}

impl ThemeCheck for SkipLinksCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn set_context(&mut self, ctx: &ThemeContext) {
        self.is_block_theme = ctx.is_block_theme();
        self.theme = Some(ctx.clone());
    }

    fn check(&mut self, _php_files: &FileMap, _css_files: &FileMap, _other_files: &FileMap) -> bool {
        let missing = self.templates_without_main_tag();
        let info = missing.join(", ");

        if !info.is_empty() {
            self.violations.push(
                Violation::new(NAME, self.severity, missing_main_message(&info))
                    .with_files(missing),
            );
        }

        true
    }

    fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

/// Slugs of every `wp:pattern` block reference in `contents`, in order,
/// duplicates included. `None` when there are none.
///
/// Non-UTF-8 bytes inside a slug are decoded lossily.
#[must_use]
pub fn template_has_patterns(contents: &[u8]) -> Option<Vec<String>> {
    let slugs: Vec<String> = PATTERN_REF_REGEX
        .captures_iter(contents)
        .map(|caps| String::from_utf8_lossy(&caps[1]).into_owned())
        .collect();

    if slugs.is_empty() {
        None
    } else {
        Some(slugs)
    }
}

fn missing_main_message(templates: &str) -> String {
    format!(
        "Skip links are missing from the following templates: {templates} \
         Please make sure the templates have a <main> tag"
    )
}

/// Non-recursive, sorted listing of `dir/<pattern>`. Errors yield no entries.
fn glob_files(dir: &Path, pattern: &str) -> Vec<PathBuf> {
    let full = format!(
        "{}/{pattern}",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let options = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    match glob::glob_with(&full, options) {
        Ok(paths) => paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    None
                }
            })
            .collect(),
        Err(e) => {
            warn!("Invalid glob pattern {full}: {e}");
            Vec::new()
        }
    }
}

fn has_main_tag(contents: &[u8]) -> bool {
    contents.windows(MAIN_TAG.len()).any(|w| w == MAIN_TAG)
}

/// Raw bytes of `path`; unreadable files count as empty.
fn read_or_empty(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap_or_else(|e| {
        warn!("Failed to read {}: {e}", path.display());
        Vec::new()
    })
}
