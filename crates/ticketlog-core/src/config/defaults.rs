//! Default configuration values

use super::types::Config;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "ticketlog.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "ticketlog.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".ticketlog.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".ticketlog.toml",
    ]
}

/// Generate default configuration TOML
pub fn default_config_toml() -> String {
    let config = Config::default();
    toml::to_string_pretty(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TOML_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Ticketlog Configuration

jira:
  # Used to build ticket links: <base_url>/browse/<KEY>
  base_url: ""
  # A single status or a list of statuses treated as approved
  approval_status:
    - Done
    - Closed
    - Accepted
  include_issue_types: []
  exclude_issue_types:
    - Sub-task

release:
  # Fixed release name; a random one is generated when unset
  name: null

output:
  name: changelog_message
"#;

const DEFAULT_CONFIG_TOML_TEMPLATE: &str = r#"[jira]
base_url = ""
approval_status = ["Done", "Closed", "Accepted"]
include_issue_types = []
exclude_issue_types = ["Sub-task"]

[release]

[output]
name = "changelog_message"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(
            config.jira.approval_status.to_set(),
            Config::default().jira.approval_status.to_set()
        );
        assert_eq!(config.output.name, "changelog_message");
    }

    #[test]
    fn test_default_toml_round_trips() {
        let config: Config = toml::from_str(&default_config_toml()).unwrap();
        assert_eq!(config.jira.exclude_issue_types, vec!["Sub-task"]);
    }
}
