//! Ticketlog Core - Core library for ticket-based release changelogs
//!
//! This crate provides the input data model, error handling and
//! configuration shared by the changelog pipeline and the CLI.

pub mod config;
pub mod error;
pub mod input;
pub mod types;

pub use config::{ApprovalStatus, Config};
pub use error::{ConfigError, InputError, Result, TicketlogError};
pub use types::{CommitLogEntry, IssueType, Reporter, Status, Ticket, TicketFields};
