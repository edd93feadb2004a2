//! Init command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use ticketlog_core::config::defaults::{
    default_config_toml, DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML,
};

use crate::cli::{output, Cli};

/// Initialize a new Ticketlog configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Write TOML instead of YAML
    #[arg(long)]
    pub toml: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, toml = self.toml, "executing init command");
        let cwd = std::env::current_dir()?;
        let default_name = if self.toml {
            DEFAULT_CONFIG_TOML
        } else {
            DEFAULT_CONFIG_YAML
        };
        let config_path = self.output.clone().unwrap_or_else(|| cwd.join(default_name));

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let content = if self.toml {
            default_config_toml()
        } else {
            DEFAULT_CONFIG_TEMPLATE.to_string()
        };
        std::fs::write(&config_path, content)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                style(config_path.display()).cyan()
            ));
            eprintln!();
            eprintln!("Next steps:");
            eprintln!("  1. Set jira.base_url in {}", config_path.display());
            eprintln!("  2. Run {} to verify your setup", style("ticketlog validate").cyan());
            eprintln!(
                "  3. Run {} to build a changelog",
                style("ticketlog changelog --input commits.json").cyan()
            );
        }

        Ok(())
    }
}
