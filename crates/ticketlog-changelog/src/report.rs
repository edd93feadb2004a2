//! Structured changelog report

use serde::Serialize;
use ticketlog_core::CommitLogEntry;

use crate::aggregate::Aggregation;
use crate::types::{ReporterGroup, TicketEntry};

/// Commits and tickets of one release run
#[derive(Debug, Clone, Serialize)]
pub struct ChangelogReport<'a> {
    /// Release name
    pub release: String,
    pub commits: CommitsSection<'a>,
    pub tickets: TicketsSection<'a>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitsSection<'a> {
    pub all: &'a [CommitLogEntry],
    pub tickets: Vec<&'a CommitLogEntry>,
    pub no_tickets: Vec<&'a CommitLogEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketsSection<'a> {
    pub all: Vec<TicketEntry<'a>>,
    pub approved: Vec<TicketEntry<'a>>,
    pub pending: Vec<TicketEntry<'a>>,
    pub pending_by_owner: Vec<ReporterGroup<'a>>,
}

impl<'a> ChangelogReport<'a> {
    /// Place aggregation and owner grouping results into the report shape
    pub fn assemble(
        release: impl Into<String>,
        aggregation: Aggregation<'a>,
        pending_by_owner: Vec<ReporterGroup<'a>>,
    ) -> Self {
        Self {
            release: release.into(),
            commits: CommitsSection {
                all: aggregation.commits,
                tickets: aggregation.commits_with_tickets,
                no_tickets: aggregation.commits_without_tickets,
            },
            tickets: TicketsSection {
                all: aggregation.tickets,
                approved: aggregation.approved,
                pending: aggregation.pending,
                pending_by_owner,
            },
        }
    }

    /// Tickets that should be listed in the changelog
    pub fn listed_tickets(&self) -> impl Iterator<Item = &TicketEntry<'a>> {
        self.tickets.all.iter().filter(|t| !t.is_reverted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::TicketAggregator;
    use crate::owners::group_by_owner;
    use ticketlog_core::{Reporter, Ticket};

    #[test]
    fn test_assemble_places_fields() {
        let commits = vec![
            CommitLogEntry::new("a1", "").with_ticket(Ticket::new(
                "PROJ-1",
                "Fix bug",
                "Bug",
                "Open",
                Reporter::new("a@x.com", "Alice"),
            )),
            CommitLogEntry::new("a2", ""),
        ];
        let aggregation = TicketAggregator::from_statuses(["Done"]).aggregate(&commits);
        let owners = group_by_owner(&aggregation.pending);

        let report = ChangelogReport::assemble("brave-river-0001", aggregation, owners);

        assert_eq!(report.release, "brave-river-0001");
        assert_eq!(report.commits.all.len(), 2);
        assert_eq!(report.commits.tickets.len(), 1);
        assert_eq!(report.commits.no_tickets.len(), 1);
        assert_eq!(report.tickets.pending.len(), 1);
        assert_eq!(report.tickets.pending_by_owner[0].email, "a@x.com");
    }

    #[test]
    fn test_report_json_shape() {
        let commits = vec![CommitLogEntry::new("a1", "")];
        let aggregation = TicketAggregator::from_statuses(["Done"]).aggregate(&commits);
        let report = ChangelogReport::assemble("v1", aggregation, Vec::new());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["commits"]["noTickets"][0]["hash"], "a1");
        assert!(json["tickets"]["pendingByOwner"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_listed_tickets_skips_reverted() {
        let reporter = Reporter::new("a@x.com", "Alice");
        let commits = vec![CommitLogEntry::new("a1", "")
            .with_ticket(Ticket::new("PROJ-1", "kept", "Bug", "Done", reporter.clone()))
            .with_ticket(
                Ticket::new("PROJ-2", "undone", "Bug", "Done", reporter).with_reverted(true),
            )];
        let aggregation = TicketAggregator::from_statuses(["Done"]).aggregate(&commits);
        let report = ChangelogReport::assemble("v1", aggregation, Vec::new());

        let keys: Vec<_> = report.listed_tickets().map(|t| t.key()).collect();
        assert_eq!(keys, vec!["PROJ-1"]);
    }
}
