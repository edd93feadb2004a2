//! Changelog formatters

mod json;
mod markdown;

pub use json::JsonFormatter;
pub use markdown::{MarkdownFormatter, NO_TICKETS_PLACEHOLDER};

use crate::report::ChangelogReport;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format a changelog report to string
    fn format(&self, report: &ChangelogReport<'_>) -> String;

    /// Short name of the output format
    fn name(&self) -> &'static str;
}

/// Render the changelog message for a report
pub fn render(report: &ChangelogReport<'_>, base_url: &str) -> String {
    MarkdownFormatter::new(base_url).format(report)
}
