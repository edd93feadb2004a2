//! Changelog generation

use ticketlog_core::config::Config;
use ticketlog_core::CommitLogEntry;
use tracing::{debug, info, instrument};

use crate::aggregate::TicketAggregator;
use crate::filter::IssueTypeFilter;
use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::owners::group_by_owner;
use crate::report::ChangelogReport;

/// Runs aggregation, owner grouping and rendering for one release
pub struct ChangelogGenerator {
    aggregator: TicketAggregator,
    filter: IssueTypeFilter,
    formatter: Box<dyn ChangelogFormatter>,
}

impl ChangelogGenerator {
    /// Create a generator with the markdown formatter
    pub fn new(config: &Config) -> Self {
        Self {
            aggregator: TicketAggregator::new(&config.jira.approval_status),
            filter: IssueTypeFilter::from_config(&config.jira),
            formatter: Box::new(MarkdownFormatter::new(&config.jira.base_url)),
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Use a custom issue type filter
    pub fn with_filter(mut self, filter: IssueTypeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Apply issue type filtering to the raw commit logs
    pub fn prepare(&self, commits: Vec<CommitLogEntry>) -> Vec<CommitLogEntry> {
        self.filter.apply(commits)
    }

    /// Build the structured report for already prepared commits
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate<'a>(
        &self,
        release: &str,
        commits: &'a [CommitLogEntry],
    ) -> ChangelogReport<'a> {
        info!(release, commit_count = commits.len(), "generating changelog report");

        let aggregation = self.aggregator.aggregate(commits);
        let pending_by_owner = group_by_owner(&aggregation.pending);
        let report = ChangelogReport::assemble(release, aggregation, pending_by_owner);

        debug!(
            tickets = report.tickets.all.len(),
            approved = report.tickets.approved.len(),
            pending = report.tickets.pending.len(),
            owners = report.tickets.pending_by_owner.len(),
            "changelog report built"
        );
        report
    }

    /// Format a report to string
    pub fn format(&self, report: &ChangelogReport<'_>) -> String {
        debug!(formatter = self.formatter.name(), "formatting changelog report");
        self.formatter.format(report)
    }

    /// Name of the configured output format
    pub fn format_name(&self) -> &'static str {
        self.formatter.name()
    }

    /// Generate and format in one step
    pub fn generate_formatted(&self, release: &str, commits: &[CommitLogEntry]) -> String {
        let report = self.generate(release, commits);
        self.format(&report)
    }
}
