//! JSON report output

use tracing::warn;

use super::ChangelogFormatter;
use crate::report::ChangelogReport;

/// Serializes the whole report as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ChangelogFormatter for JsonFormatter {
    fn format(&self, report: &ChangelogReport<'_>) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|e| {
            warn!(error = %e, "failed to serialize changelog report");
            "{}".to_string()
        })
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::TicketAggregator;
    use ticketlog_core::{CommitLogEntry, Reporter, Ticket};

    #[test]
    fn test_json_report() {
        let commits = vec![CommitLogEntry::new("a1", "").with_ticket(Ticket::new(
            "PROJ-1",
            "Fix bug",
            "Bug",
            "Done",
            Reporter::new("a@x.com", "Alice"),
        ))];
        let aggregation = TicketAggregator::from_statuses(["Done"]).aggregate(&commits);
        let report = ChangelogReport::assemble("v1", aggregation, Vec::new());

        let output = JsonFormatter::new().format(&report);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["release"], "v1");
        assert_eq!(value["tickets"]["approved"][0]["key"], "PROJ-1");
        assert_eq!(value["tickets"]["all"][0]["commits"][0], "a1");
    }
}
