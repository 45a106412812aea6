use crate::check::ThemeCheck;
use crate::config::Config;
use crate::rules;
use crate::types::Severity;

/// Ordered set of checks for one lint run.
///
/// Checks are registered explicitly; there is no process-wide list.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<Box<dyn ThemeCheck>>,
}

impl CheckRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in rule, configured from `config`. Disabled rules are
    /// still registered; use [`retain`](Self::retain) to drop them.
    #[must_use]
    pub fn builtin(config: &Config) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(rules::SkipLinksCheck::new(
            config
                .rule_severity(rules::skip_links::NAME)
                .unwrap_or(Severity::Required),
        )));
        registry
    }

    pub fn register(&mut self, check: Box<dyn ThemeCheck>) {
        self.checks.push(check);
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&dyn ThemeCheck) -> bool) {
        self.checks.retain(|c| keep(c.as_ref()));
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn ThemeCheck>> {
        self.checks.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.names())
            .finish()
    }
}
