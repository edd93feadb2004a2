//! Markdown changelog message

use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::report::ChangelogReport;
use crate::types::TicketEntry;

/// Line emitted when no ticket is listed
pub const NO_TICKETS_PLACEHOLDER: &str = " ~ None ~ ";

/// Renders one bullet per listed ticket, linking to the tracker
pub struct MarkdownFormatter {
    base_url: String,
}

impl MarkdownFormatter {
    /// Create a formatter linking tickets under `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Link to a ticket in the tracker
    pub fn ticket_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url, key)
    }

    fn bullet(&self, ticket: &TicketEntry<'_>) -> String {
        let summary = html_escape::decode_html_entities(ticket.summary());
        format!(
            "  * [{}]({}) - {}\n",
            ticket.key(),
            self.ticket_url(ticket.key()),
            summary
        )
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, report), fields(release = %report.release, ticket_count = report.tickets.all.len()))]
    fn format(&self, report: &ChangelogReport<'_>) -> String {
        let mut output = String::new();

        for ticket in report.listed_tickets() {
            output.push_str(&self.bullet(ticket));
        }

        if output.is_empty() {
            output.push_str(NO_TICKETS_PLACEHOLDER);
            output.push('\n');
        }

        debug!(output_len = output.len(), "changelog message rendered");
        output
    }

    fn name(&self) -> &'static str {
        "markdown"
    }
}
