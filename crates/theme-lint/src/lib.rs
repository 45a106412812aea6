//! Lint rules for block themes.
//!
//! Each rule implements [`ThemeCheck`] and is registered explicitly in a
//! [`CheckRegistry`]; the [`Analyzer`] collects the theme's files and runs
//! every enabled check.
//!
//! | Rule | Severity | Description |
//! |------|----------|-------------|
//! | `SkipLinksCheck` | required | every `templates/*.html` has a `<main>` tag, directly or via referenced patterns |
//!
//! # Usage
//!
//! ```bash
//! cargo run -p theme-lint -- check path/to/theme
//! ```

#![forbid(unsafe_code)]

pub mod analyzer;
pub mod check;
pub mod config;
pub mod context;
pub mod registry;
pub mod rules;
pub mod types;

pub use analyzer::Analyzer;
pub use check::ThemeCheck;
pub use config::Config;
pub use context::{ThemeContext, ThemeFiles};
pub use registry::CheckRegistry;
pub use types::{LintResult, Severity, Violation};
