use crate::config::Config;
use crate::context::{ThemeContext, ThemeFiles};
use crate::registry::CheckRegistry;
use crate::types::LintResult;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Theme root is not a directory: {0}")]
    NotADirectory(PathBuf),
}

pub struct Analyzer {
    root: PathBuf,
    config: Config,
    exclude_patterns: Vec<glob::Pattern>,
    invalid_excludes: Vec<glob::PatternError>,
    rule_filter: Option<String>,
}

impl Analyzer {
    #[must_use]
    pub fn new(root: PathBuf, config: Config) -> Self {
        let mut exclude_patterns = Vec::new();
        let mut invalid_excludes = Vec::new();
        for raw in &config.analyzer.exclude {
            match glob::Pattern::new(raw) {
                Ok(p) => exclude_patterns.push(p),
                Err(e) => invalid_excludes.push(e),
            }
        }
        Self {
            root,
            config,
            exclude_patterns,
            invalid_excludes,
            rule_filter: None,
        }
    }

    #[must_use]
    pub fn with_rule_filter(mut self, filter: Option<&str>) -> Self {
        self.rule_filter = filter.map(String::from);
        self
    }

    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        if let Some(e) = self.invalid_excludes.first() {
            return Err(AnalyzerError::Glob(glob::PatternError {
                pos: e.pos,
                msg: e.msg,
            }));
        }
        if !self.root.is_dir() {
            return Err(AnalyzerError::NotADirectory(self.root.clone()));
        }

        let ctx = ThemeContext::new(&self.root);
        let files = self.collect_files()?;
        info!("Collected {} theme files", files.len());

        let mut registry = self.build_registry();
        let mut result = LintResult::new();
        result.files_checked = files.len();

        for check in registry.iter_mut() {
            debug!("Running check `{}`", check.name());
            check.set_context(&ctx);
            if !check.check(&files.php, &files.css, &files.other) {
                warn!("Check `{}` failed the run", check.name());
                result.passed = false;
            }
            result.violations.extend(check.violations().iter().cloned());
            result.checks_run += 1;
        }

        info!(
            "Analysis complete: {} violations from {} checks",
            result.violations.len(),
            result.checks_run
        );

        Ok(result)
    }

    fn build_registry(&self) -> CheckRegistry {
        let mut registry = CheckRegistry::builtin(&self.config);
        registry.retain(|c| self.should_run_rule(c.name()));
        debug!("Active checks: {:?}", registry.names());
        registry
    }

    fn collect_files(&self) -> Result<ThemeFiles, AnalyzerError> {
        let pattern = format!(
            "{}/**/*",
            glob::Pattern::escape(&self.root.to_string_lossy())
        );
        let mut files = ThemeFiles::new();

        for entry in glob::glob(&pattern)? {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            let relative = path
                .strip_prefix(&self.root)
                .map_or_else(|_| path.clone(), Path::to_path_buf);
            if self.should_exclude(&relative) {
                continue;
            }
            let Some(contents) = read_theme_file(&path) else {
                continue;
            };
            debug!("Collected: {}", relative.display());
            files.insert(relative, contents);
        }

        Ok(files)
    }

    fn should_exclude(&self, relative: &Path) -> bool {
        // Leading separator lets `**/dir/**` match top-level directories too.
        let path_str = format!("/{}", relative.to_string_lossy());
        self.exclude_patterns.iter().any(|p| p.matches(&path_str))
    }

    fn should_run_rule(&self, rule_name: &str) -> bool {
        if let Some(ref filter) = self.rule_filter {
            if filter != rule_name {
                return false;
            }
        }
        self.config.is_rule_enabled(rule_name)
    }
}

/// Lossily decoded contents, or `None` (logged) when the file cannot be read.
fn read_theme_file(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            warn!("Skipping {}: {e}", path.display());
            None
        }
    }
}
