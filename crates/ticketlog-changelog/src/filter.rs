//! Issue type filtering of ticket references

use ticketlog_core::config::JiraConfig;
use ticketlog_core::{CommitLogEntry, Ticket};
use tracing::debug;

/// Drops ticket references by issue type before aggregation
#[derive(Debug, Clone, Default)]
pub struct IssueTypeFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl IssueTypeFilter {
    /// A filter that keeps every ticket
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the tracker configuration
    pub fn from_config(config: &JiraConfig) -> Self {
        Self {
            include: config.include_issue_types.clone(),
            exclude: config.exclude_issue_types.clone(),
        }
    }

    /// Only keep this issue type (repeatable)
    pub fn include(mut self, issue_type: impl Into<String>) -> Self {
        self.include.push(issue_type.into());
        self
    }

    /// Drop this issue type (repeatable)
    pub fn exclude(mut self, issue_type: impl Into<String>) -> Self {
        self.exclude.push(issue_type.into());
        self
    }

    /// Check if a ticket passes the filter
    pub fn accepts(&self, ticket: &Ticket) -> bool {
        let issue_type = ticket.issue_type();
        if self.exclude.iter().any(|t| t == issue_type) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|t| t == issue_type)
    }

    /// Remove rejected ticket references from every commit
    pub fn apply(&self, mut commits: Vec<CommitLogEntry>) -> Vec<CommitLogEntry> {
        let mut dropped = 0;
        for commit in &mut commits {
            let before = commit.tickets.len();
            commit.tickets.retain(|t| self.accepts(t));
            dropped += before - commit.tickets.len();
        }

        if dropped > 0 {
            debug!(dropped, "ticket references dropped by issue type");
        }
        commits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketlog_core::Reporter;

    fn ticket(key: &str, issue_type: &str) -> Ticket {
        Ticket::new(key, "summary", issue_type, "Done", Reporter::new("a@x.com", "Alice"))
    }

    #[test]
    fn test_default_config_drops_subtasks() {
        let filter = IssueTypeFilter::from_config(&JiraConfig::default());
        assert!(!filter.accepts(&ticket("PROJ-1", "Sub-task")));
        assert!(filter.accepts(&ticket("PROJ-2", "Bug")));
    }

    #[test]
    fn test_include_list_restricts() {
        let filter = IssueTypeFilter::new().include("Story");
        assert!(filter.accepts(&ticket("PROJ-1", "Story")));
        assert!(!filter.accepts(&ticket("PROJ-2", "Bug")));
    }

    #[test]
    fn test_apply_leaves_commit_without_tickets() {
        let commits = vec![
            CommitLogEntry::new("c1", "").with_ticket(ticket("PROJ-1", "Sub-task")),
            CommitLogEntry::new("c2", "")
                .with_ticket(ticket("PROJ-2", "Sub-task"))
                .with_ticket(ticket("PROJ-3", "Bug")),
        ];

        let filtered = IssueTypeFilter::new().exclude("Sub-task").apply(commits);

        assert_eq!(filtered.len(), 2);
        assert!(!filtered[0].has_tickets());
        assert_eq!(filtered[1].tickets.len(), 1);
        assert_eq!(filtered[1].tickets[0].key, "PROJ-3");
    }
}
