//! Changelog command

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use ticketlog_changelog::{name_release, ChangelogFormatter, ChangelogGenerator, JsonFormatter};
use ticketlog_core::config::{load_config_or_default, validate_config, ApprovalStatus, Config};
use ticketlog_core::input::{load_commit_logs, read_commit_logs};
use ticketlog_core::{CommitLogEntry, ConfigError, TicketlogError};

use crate::cli::{output, Cli, OutputFormat};
use crate::publish;

/// Build the changelog message from resolved commit logs
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Resolved commit logs as JSON (`-` reads stdin)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    /// Issue tracker base URL for ticket links
    #[arg(long, env = "TICKETLOG_BASE_URL")]
    pub base_url: Option<String>,

    /// Status treated as approved (repeatable, replaces configured statuses)
    #[arg(long = "approval-status", value_name = "STATUS")]
    pub approval_status: Vec<String>,

    /// Fixed release name instead of a generated one
    #[arg(long, env = "VERSION")]
    pub release_name: Option<String>,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// GitHub Actions output file (defaults to $GITHUB_OUTPUT)
    #[arg(long, value_name = "FILE")]
    pub github_output: Option<PathBuf>,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(input = %self.input.display(), "executing changelog command");
        let cwd = std::env::current_dir()?;
        let (mut config, _) = load_config_or_default(&cwd)?;
        self.apply_overrides(&mut config);

        if config.jira.base_url.is_empty() {
            return Err(TicketlogError::from(ConfigError::MissingField(
                "jira.base_url".to_string(),
            ))
            .into());
        }
        validate_config(&config)?;

        let commits = self.read_input()?;
        let release = name_release(config.release.name.as_deref());

        let generator = ChangelogGenerator::new(&config);
        let commits = generator.prepare(commits);
        let report = generator.generate(&release, &commits);
        let message = generator.format(&report);
        info!(
            release = %release,
            formatter = generator.format_name(),
            tickets = report.tickets.all.len(),
            "changelog message rendered"
        );

        let rendered = match cli.format {
            OutputFormat::Text => message.clone(),
            OutputFormat::Json => JsonFormatter::new().format(&report),
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered)?;
                if !cli.quiet {
                    output::success(&format!("Changelog written to {}", path.display()));
                }
            }
            None => print!("{}", rendered),
        }

        if let Some(path) = publish::github_output_path(self.github_output.as_deref()) {
            publish::write_github_output(&path, &config.output.name, &message)?;
        }

        if !cli.quiet {
            output::info(&format!("Release {}", release));
            eprintln!("{}", output::key_value("commits", &report.commits.all.len().to_string()));
            eprintln!(
                "{}",
                output::key_value(
                    "tickets",
                    &format!(
                        "{} ({} approved, {} pending)",
                        report.tickets.all.len(),
                        report.tickets.approved.len(),
                        report.tickets.pending.len()
                    )
                )
            );
            if !report.commits.no_tickets.is_empty() {
                output::warning(&format!(
                    "{} commit(s) reference no ticket",
                    report.commits.no_tickets.len()
                ));
            }
        }

        Ok(())
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.jira.base_url = base_url.clone();
        }
        if !self.approval_status.is_empty() {
            config.jira.approval_status = ApprovalStatus::Many(self.approval_status.clone());
        }
        if let Some(name) = self.release_name.as_ref().filter(|n| !n.is_empty()) {
            config.release.name = Some(name.clone());
        }
    }

    fn read_input(&self) -> ticketlog_core::Result<Vec<CommitLogEntry>> {
        if self.input == Path::new("-") {
            read_commit_logs(std::io::stdin().lock(), "<stdin>")
        } else {
            load_commit_logs(&self.input)
        }
    }
}
