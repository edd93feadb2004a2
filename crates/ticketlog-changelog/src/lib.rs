//! Ticketlog Changelog - Ticket-based changelog generation
//!
//! This crate groups resolved commit logs by ticket, splits tickets into
//! approved and pending, groups pending tickets by reporter and renders the
//! result as a changelog message.

pub mod aggregate;
pub mod filter;
pub mod formatter;
pub mod generator;
pub mod owners;
pub mod release_name;
pub mod report;
pub mod types;

pub use aggregate::{Aggregation, TicketAggregator};
pub use filter::IssueTypeFilter;
pub use formatter::{render, ChangelogFormatter, JsonFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use owners::group_by_owner;
pub use release_name::{name_release, ReleaseNamer};
pub use report::{ChangelogReport, CommitsSection, TicketsSection};
pub use types::{ReporterGroup, TicketEntry};
