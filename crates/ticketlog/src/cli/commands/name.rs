//! Release name command

use clap::Args;
use tracing::info;

use ticketlog_changelog::name_release;
use ticketlog_core::config::load_config_or_default;

use crate::cli::{Cli, OutputFormat};

/// Print a release name
#[derive(Debug, Args)]
pub struct NameCommand {
    /// Use this name instead of generating one
    #[arg(long, env = "VERSION")]
    pub release_name: Option<String>,
}

impl NameCommand {
    /// Execute the name command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(release_name = ?self.release_name, "executing name command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;

        let override_value = self
            .release_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(config.release.name.as_deref());
        let name = name_release(override_value);

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "release": name }));
            }
            OutputFormat::Text => println!("{}", name),
        }

        Ok(())
    }
}
