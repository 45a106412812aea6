pub mod skip_links;

pub use skip_links::SkipLinksCheck;

/// All built-in rules: (name, description)
pub const ALL_RULES: &[(&str, &str)] = &[(skip_links::NAME, skip_links::DESCRIPTION)];
