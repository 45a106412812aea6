use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Manifest whose presence marks a block theme.
pub const THEME_MANIFEST: &str = "theme.json";

/// Index templates that together also mark a block theme.
pub const TEMPLATE_INDEXES: [&str; 2] = ["templates/index.html", "block-templates/index.html"];

/// The theme being checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeContext {
    root: PathBuf,
}

impl ThemeContext {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `theme.json` exists, or both index templates exist.
    #[must_use]
    pub fn is_block_theme(&self) -> bool {
        self.root.join(THEME_MANIFEST).exists()
            || TEMPLATE_INDEXES
                .iter()
                .all(|index| self.root.join(index).exists())
    }
}

/// File contents keyed by path relative to the theme root.
pub type FileMap = BTreeMap<PathBuf, String>;

/// Theme files split into the three collections handed to every check.
#[derive(Debug, Clone, Default)]
pub struct ThemeFiles {
    pub php: FileMap,
    pub css: FileMap,
    pub other: FileMap,
}

impl ThemeFiles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files are bucketed by extension, case-insensitively.
    pub fn insert(&mut self, relative_path: PathBuf, contents: String) {
        let ext = relative_path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let bucket = match ext.as_deref() {
            Some("php") => &mut self.php,
            Some("css") => &mut self.css,
            _ => &mut self.other,
        };
        bucket.insert(relative_path, contents);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.php.len() + self.css.len() + self.other.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
