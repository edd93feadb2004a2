//! Commit and ticket types as delivered by the upstream collaborators

use serde::{Deserialize, Serialize};

/// A single source-control commit with its resolved ticket references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitLogEntry {
    /// Commit identifier (usually the full hash)
    #[serde(alias = "id")]
    pub hash: String,
    /// Commit message
    #[serde(default)]
    pub message: String,
    /// Tickets this commit references, in the order they were found
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    /// Whether the commit was later reverted.
    ///
    /// Carried through for report consumers only. Rendering skips tickets by
    /// [`Ticket::reverted`]; this flag filters nothing.
    #[serde(default)]
    pub reverted: bool,
}

impl CommitLogEntry {
    /// Create a new commit without ticket references
    pub fn new(hash: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
            tickets: Vec::new(),
            reverted: false,
        }
    }

    /// Attach a ticket reference
    pub fn with_ticket(mut self, ticket: Ticket) -> Self {
        self.tickets.push(ticket);
        self
    }

    /// Check if the commit references at least one ticket
    pub fn has_tickets(&self) -> bool {
        !self.tickets.is_empty()
    }
}

/// Issue tracker ticket metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Ticket key (e.g. `PROJ-123`)
    pub key: String,
    /// Tracker fields
    pub fields: TicketFields,
    /// Chat handle of the reporter, if one was resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_user: Option<String>,
    /// Whether every commit introducing this ticket was reverted
    #[serde(default)]
    pub reverted: bool,
}

impl Ticket {
    /// Create a new ticket
    pub fn new(
        key: impl Into<String>,
        summary: impl Into<String>,
        issue_type: impl Into<String>,
        status: impl Into<String>,
        reporter: Reporter,
    ) -> Self {
        Self {
            key: key.into(),
            fields: TicketFields {
                summary: summary.into(),
                issue_type: IssueType {
                    name: issue_type.into(),
                },
                status: Status {
                    name: status.into(),
                },
                reporter,
            },
            slack_user: None,
            reverted: false,
        }
    }

    /// Set the reporter's chat handle
    pub fn with_slack_user(mut self, user: impl Into<String>) -> Self {
        self.slack_user = Some(user.into());
        self
    }

    /// Mark the ticket as reverted
    pub fn with_reverted(mut self, reverted: bool) -> Self {
        self.reverted = reverted;
        self
    }

    pub fn summary(&self) -> &str {
        &self.fields.summary
    }

    pub fn issue_type(&self) -> &str {
        &self.fields.issue_type.name
    }

    pub fn status(&self) -> &str {
        &self.fields.status.name
    }

    pub fn reporter(&self) -> &Reporter {
        &self.fields.reporter
    }
}

/// Ticket fields as returned by the tracker API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketFields {
    /// One-line summary
    pub summary: String,
    /// Issue type (Bug, Story, ...)
    #[serde(rename = "issuetype")]
    pub issue_type: IssueType,
    /// Workflow status
    pub status: Status,
    /// Person who reported the ticket
    pub reporter: Reporter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueType {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub name: String,
}

/// Ticket reporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reporter {
    /// Email address, used as the ownership key
    pub email_address: String,
    /// Display name
    pub display_name: String,
}

impl Reporter {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email_address: email.into(),
            display_name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_deserializes_tracker_shape() {
        let json = r#"{
            "key": "PROJ-1",
            "fields": {
                "summary": "Fix bug",
                "issuetype": { "name": "Bug" },
                "status": { "name": "Done" },
                "reporter": { "emailAddress": "a@x.com", "displayName": "Alice" }
            },
            "slackUser": "alice"
        }"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.key, "PROJ-1");
        assert_eq!(ticket.issue_type(), "Bug");
        assert_eq!(ticket.status(), "Done");
        assert_eq!(ticket.reporter().email_address, "a@x.com");
        assert_eq!(ticket.slack_user.as_deref(), Some("alice"));
        assert!(!ticket.reverted);
    }

    #[test]
    fn test_commit_accepts_id_alias() {
        let commit: CommitLogEntry =
            serde_json::from_str(r#"{ "id": "a2", "tickets": [] }"#).unwrap();
        assert_eq!(commit.hash, "a2");
        assert!(commit.message.is_empty());
        assert!(!commit.has_tickets());
        assert!(!commit.reverted);
    }

    #[test]
    fn test_reporter_requires_email() {
        let json = r#"{ "displayName": "Alice" }"#;
        assert!(serde_json::from_str::<Reporter>(json).is_err());
    }
}
