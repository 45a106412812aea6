//! The capability every theme check implements.

pub use crate::context::FileMap;
use crate::context::ThemeContext;
use crate::types::Violation;

/// A single rule run against one theme.
///
/// The runner calls [`set_context`](Self::set_context) once, then
/// [`check`](Self::check), then reads back [`errors`](Self::errors).
pub trait ThemeCheck {
    /// Rule name as used in config files and `--rule`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn set_context(&mut self, ctx: &ThemeContext);

    /// Returns `false` only when the run as a whole should be marked as failed.
    /// Findings are recorded and read back through [`violations`](Self::violations).
    fn check(&mut self, php_files: &FileMap, css_files: &FileMap, other_files: &FileMap) -> bool;

    fn violations(&self) -> &[Violation];

    /// Recorded findings rendered as `"<LABEL> <message>"`.
    fn errors(&self) -> Vec<String> {
        self.violations().iter().map(ToString::to_string).collect()
    }
}
