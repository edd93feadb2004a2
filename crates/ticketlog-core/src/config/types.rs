//! Configuration types

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Main configuration for Ticketlog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Issue tracker configuration
    pub jira: JiraConfig,

    /// Release naming configuration
    pub release: ReleaseConfig,

    /// Output publishing configuration
    pub output: OutputConfig,
}

/// Issue tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JiraConfig {
    /// Base URL used to build ticket links (e.g. `https://jira.example.com`)
    pub base_url: String,

    /// Status names that count as approved
    pub approval_status: ApprovalStatus,

    /// Only keep tickets of these issue types (empty keeps all)
    pub include_issue_types: Vec<String>,

    /// Drop tickets of these issue types
    pub exclude_issue_types: Vec<String>,
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            approval_status: ApprovalStatus::default(),
            include_issue_types: Vec::new(),
            exclude_issue_types: vec!["Sub-task".to_string()],
        }
    }
}

/// Approved status names, given either as one string or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApprovalStatus {
    /// A single status name
    One(String),
    /// Several status names
    Many(Vec<String>),
}

impl ApprovalStatus {
    /// Normalize to a set of status names
    pub fn to_set(&self) -> BTreeSet<String> {
        match self {
            Self::One(name) => BTreeSet::from([name.clone()]),
            Self::Many(names) => names.iter().cloned().collect(),
        }
    }
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        Self::Many(vec![
            "Done".to_string(),
            "Closed".to_string(),
            "Accepted".to_string(),
        ])
    }
}

impl From<Vec<String>> for ApprovalStatus {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names)
    }
}

impl From<&str> for ApprovalStatus {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

/// Release naming configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Fixed release name; a generated one is used when unset
    pub name: Option<String>,
}

/// Output publishing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Name of the published output value
    pub name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            name: "changelog_message".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_status_scalar() {
        let config: JiraConfig = serde_yaml::from_str("approval_status: Done").unwrap();
        assert_eq!(config.approval_status, ApprovalStatus::One("Done".to_string()));
        assert_eq!(config.approval_status.to_set(), BTreeSet::from(["Done".to_string()]));
    }

    #[test]
    fn test_approval_status_list() {
        let config: JiraConfig =
            serde_yaml::from_str("approval_status: [Done, Closed, Done]").unwrap();
        let set = config.approval_status.to_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("Closed"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.jira.base_url.is_empty());
        assert_eq!(config.jira.approval_status.to_set().len(), 3);
        assert_eq!(config.jira.exclude_issue_types, vec!["Sub-task"]);
        assert_eq!(config.output.name, "changelog_message");
        assert!(config.release.name.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            "[jira]\nbase_url = \"https://jira.example.com\"\napproval_status = \"Released\"\n",
        )
        .unwrap();
        assert_eq!(config.jira.base_url, "https://jira.example.com");
        assert_eq!(config.jira.approval_status.to_set().len(), 1);
        assert_eq!(config.jira.exclude_issue_types, vec!["Sub-task"]);
    }
}
