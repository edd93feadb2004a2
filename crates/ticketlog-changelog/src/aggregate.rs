//! Grouping commits by ticket and classifying tickets by approval state

use std::collections::{BTreeSet, HashMap};

use ticketlog_core::{ApprovalStatus, CommitLogEntry, Ticket};
use tracing::{debug, instrument};

use crate::types::TicketEntry;

/// Groups commits by referenced ticket and splits tickets into approved and pending
#[derive(Debug, Clone)]
pub struct TicketAggregator {
    approval_statuses: BTreeSet<String>,
}

impl TicketAggregator {
    /// Create an aggregator for the configured approval statuses
    pub fn new(approval_status: &ApprovalStatus) -> Self {
        Self {
            approval_statuses: approval_status.to_set(),
        }
    }

    /// Create an aggregator from an already normalized status set
    pub fn from_statuses<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            approval_statuses: statuses.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a ticket's status is an approval status
    pub fn is_approved(&self, ticket: &Ticket) -> bool {
        self.approval_statuses.contains(ticket.status())
    }

    /// Aggregate commits into tickets.
    ///
    /// Tickets are ordered by issue type name; tickets sharing an issue type
    /// keep the order in which they were first referenced.
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn aggregate<'a>(&self, commits: &'a [CommitLogEntry]) -> Aggregation<'a> {
        let mut tickets: Vec<TicketEntry<'a>> = Vec::new();
        let mut positions: HashMap<&'a str, usize> = HashMap::new();

        for commit in commits {
            for ticket in &commit.tickets {
                let position = *positions.entry(ticket.key.as_str()).or_insert_with(|| {
                    tickets.push(TicketEntry::new(ticket));
                    tickets.len() - 1
                });
                tickets[position].add_commit(commit);
            }
        }

        // Vec::sort_by is stable, ties keep discovery order
        tickets.sort_by(|a, b| a.issue_type().cmp(b.issue_type()));

        let (approved, pending): (Vec<_>, Vec<_>) = tickets
            .iter()
            .cloned()
            .partition(|entry| self.is_approved(entry.ticket));

        let (commits_with_tickets, commits_without_tickets): (Vec<_>, Vec<_>) =
            commits.iter().partition(|commit| commit.has_tickets());

        let index = tickets
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.key(), i))
            .collect();

        debug!(
            ticket_count = tickets.len(),
            approved = approved.len(),
            pending = pending.len(),
            without_tickets = commits_without_tickets.len(),
            "commits aggregated"
        );

        Aggregation {
            commits,
            tickets,
            approved,
            pending,
            commits_with_tickets,
            commits_without_tickets,
            index,
        }
    }
}

/// Result of aggregating commits by ticket
#[derive(Debug, Clone)]
pub struct Aggregation<'a> {
    /// All commits, in input order
    pub commits: &'a [CommitLogEntry],
    /// Distinct tickets ordered by issue type
    pub tickets: Vec<TicketEntry<'a>>,
    /// Tickets whose status is an approval status
    pub approved: Vec<TicketEntry<'a>>,
    /// Tickets whose status is not an approval status
    pub pending: Vec<TicketEntry<'a>>,
    /// Commits referencing at least one ticket
    pub commits_with_tickets: Vec<&'a CommitLogEntry>,
    /// Commits referencing no ticket
    pub commits_without_tickets: Vec<&'a CommitLogEntry>,
    index: HashMap<&'a str, usize>,
}

impl<'a> Aggregation<'a> {
    /// Look up a ticket by key
    pub fn ticket(&self, key: &str) -> Option<&TicketEntry<'a>> {
        self.index.get(key).map(|&i| &self.tickets[i])
    }
}
