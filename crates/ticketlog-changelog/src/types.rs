//! Changelog types

use serde::{Serialize, Serializer};
use ticketlog_core::{CommitLogEntry, Ticket};

/// A ticket together with every commit that references it
#[derive(Debug, Clone, Serialize)]
pub struct TicketEntry<'a> {
    /// Ticket metadata, taken from the first commit that referenced it
    #[serde(flatten)]
    pub ticket: &'a Ticket,
    /// Referencing commits in discovery order
    #[serde(serialize_with = "commit_hashes")]
    pub commits: Vec<&'a CommitLogEntry>,
}

impl<'a> TicketEntry<'a> {
    /// Create an entry with no commits yet
    pub fn new(ticket: &'a Ticket) -> Self {
        Self {
            ticket,
            commits: Vec::new(),
        }
    }

    pub fn key(&self) -> &'a str {
        let ticket: &'a Ticket = self.ticket;
        &ticket.key
    }

    pub fn summary(&self) -> &'a str {
        self.ticket.summary()
    }

    pub fn issue_type(&self) -> &'a str {
        self.ticket.issue_type()
    }

    pub fn status(&self) -> &'a str {
        self.ticket.status()
    }

    /// Whether the ticket was reverted upstream and should not be listed
    pub fn is_reverted(&self) -> bool {
        self.ticket.reverted
    }

    /// Append a commit unless it is already the latest one recorded
    pub(crate) fn add_commit(&mut self, commit: &'a CommitLogEntry) {
        let seen = self
            .commits
            .last()
            .is_some_and(|last| std::ptr::eq(*last, commit));
        if !seen {
            self.commits.push(commit);
        }
    }
}

/// A reporter and the pending tickets they own
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporterGroup<'a> {
    /// Reporter email, the grouping key
    pub email: &'a str,
    /// Reporter display name
    pub name: &'a str,
    /// Chat handle, if known
    pub slack_user: Option<&'a str>,
    /// Owned pending tickets in discovery order
    pub tickets: Vec<TicketEntry<'a>>,
}

impl<'a> ReporterGroup<'a> {
    /// Start a group from its first ticket
    pub fn new(entry: TicketEntry<'a>) -> Self {
        let ticket: &'a Ticket = entry.ticket;
        let reporter = ticket.reporter();
        Self {
            email: &reporter.email_address,
            name: &reporter.display_name,
            slack_user: ticket.slack_user.as_deref(),
            tickets: vec![entry],
        }
    }
}

fn commit_hashes<S>(commits: &[&CommitLogEntry], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(commits.iter().map(|c| c.hash.as_str()))
}
