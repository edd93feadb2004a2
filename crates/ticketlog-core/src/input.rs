//! Loading resolved commit logs at the system boundary

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{InputError, Result};
use crate::types::CommitLogEntry;

/// Load commit logs from a JSON file
pub fn load_commit_logs(path: &Path) -> Result<Vec<CommitLogEntry>> {
    info!(path = %path.display(), "loading commit logs");
    let source_name = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|error| InputError::Io {
        source_name: source_name.clone(),
        error,
    })?;

    parse_named(&content, source_name)
}

/// Read commit logs from any reader (e.g. stdin)
pub fn read_commit_logs<R: Read>(mut reader: R, source_name: &str) -> Result<Vec<CommitLogEntry>> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|error| InputError::Io {
            source_name: source_name.to_string(),
            error,
        })?;

    parse_named(&content, source_name.to_string())
}

/// Parse commit logs from a JSON string
pub fn parse_commit_logs(content: &str) -> Result<Vec<CommitLogEntry>> {
    parse_named(content, "<string>".to_string())
}

fn parse_named(content: &str, source_name: String) -> Result<Vec<CommitLogEntry>> {
    let commits: Vec<CommitLogEntry> = serde_json::from_str(content)
        .map_err(|error| InputError::Parse { source_name, error })?;

    debug!(
        commit_count = commits.len(),
        ticket_refs = commits.iter().map(|c| c.tickets.len()).sum::<usize>(),
        "commit logs parsed"
    );
    Ok(commits)
}
