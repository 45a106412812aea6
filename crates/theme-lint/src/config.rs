use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default file name looked up in the working directory.
pub const DEFAULT_FILE_NAME: &str = "theme-lint.toml";

/// Contents of `theme-lint.toml`.
///
/// Every table is optional: a theme without a config file runs all
/// built-in checks at their default severity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Loads `theme-lint.toml` from the working directory, or the file
    /// passed through `--config`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Rule tables for unknown rules are kept but never consulted, so a
    /// config written for a newer release still loads.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Rules are on unless their table says `enabled = false`.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Severity override, e.g. demoting `skip-links` from `required` to
    /// `warning` while a theme is being migrated.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Globs of theme paths the file collector skips.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
        }
    }
}

fn default_exclude() -> Vec<String> {
    ["**/node_modules/**", "**/vendor/**", "**/.git/**"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub enabled: Option<bool>,

    #[serde(default)]
    pub severity: Option<Severity>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },
}
