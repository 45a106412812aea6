use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Recommended,
    Warning,
    Required,
}

impl Severity {
    /// Upper-case label shown in front of a message.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Recommended => "RECOMMENDED",
            Self::Warning => "WARNING",
            Self::Required => "REQUIRED",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    /// Offending file names, in the order they were reported.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl Violation {
    #[must_use]
    pub fn new(rule: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            severity,
            message: message.into(),
            files: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.severity, self.message)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LintResult {
    pub violations: Vec<Violation>,
    pub files_checked: usize,
    pub checks_run: usize,
    /// False when any check asked to abort the run.
    pub passed: bool,
}

impl Default for LintResult {
    fn default() -> Self {
        Self {
            violations: Vec::new(),
            files_checked: 0,
            checks_run: 0,
            passed: true,
        }
    }
}

impl LintResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Required)
    }

    /// Counts as (required, warning, recommended, info).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize, usize) {
        let mut required = 0;
        let mut warnings = 0;
        let mut recommended = 0;
        let mut infos = 0;
        for v in &self.violations {
            match v.severity {
                Severity::Required => required += 1,
                Severity::Warning => warnings += 1,
                Severity::Recommended => recommended += 1,
                Severity::Info => infos += 1,
            }
        }
        (required, warnings, recommended, infos)
    }

    pub fn print_report(&self) {
        let (required, warnings, recommended, infos) = self.count_by_severity();

        for v in &self.violations {
            eprintln!("[{}] {v}", v.rule);
        }

        eprintln!(
            "\n{} required, {} warning(s), {} recommended, {} info(s) from {} check(s) over {} file(s)",
            required, warnings, recommended, infos, self.checks_run, self.files_checked
        );
    }
}
