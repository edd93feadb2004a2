//! Configuration validation

use tracing::debug;
use url::Url;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_jira(config)?;
    validate_output(config)?;
    debug!("configuration validation passed");
    Ok(())
}

/// Check that a base URL is usable for ticket links
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        field: "jira.base_url".to_string(),
        message: message.to_string(),
    };

    let url = Url::parse(base_url).map_err(|e| invalid(&format!("not a valid URL ({})", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("must use http or https").into());
    }

    Ok(())
}

fn validate_jira(config: &Config) -> Result<()> {
    let jira = &config.jira;

    if !jira.base_url.is_empty() {
        validate_base_url(&jira.base_url)?;
    }

    let statuses = jira.approval_status.to_set();
    if statuses.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "jira.approval_status".to_string(),
            message: "at least one status is required".to_string(),
        }
        .into());
    }
    if statuses.iter().any(|s| s.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            field: "jira.approval_status".to_string(),
            message: "status names cannot be blank".to_string(),
        }
        .into());
    }

    if let Some(conflict) = jira
        .include_issue_types
        .iter()
        .find(|t| jira.exclude_issue_types.contains(t))
    {
        return Err(ConfigError::InvalidValue {
            field: "jira.include_issue_types".to_string(),
            message: format!("'{}' is also excluded", conflict),
        }
        .into());
    }

    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    let name = &config.output.name;
    if name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == '=') {
        return Err(ConfigError::InvalidValue {
            field: "output.name".to_string(),
            message: "must be non-empty without whitespace or '='".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApprovalStatus;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("https://jira.example.com").is_ok());
        assert!(validate_base_url("jira.example.com").is_err());
        assert!(validate_base_url("ftp://jira.example.com").is_err());
    }

    #[test]
    fn test_validate_empty_approval_status() {
        let mut config = Config::default();
        config.jira.approval_status = ApprovalStatus::Many(vec![]);
        assert!(validate_config(&config).is_err());

        config.jira.approval_status = ApprovalStatus::One("  ".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_issue_type_conflict() {
        let mut config = Config::default();
        config.jira.include_issue_types = vec!["Sub-task".to_string()];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_output_name() {
        let mut config = Config::default();
        config.output.name = "changelog message".to_string();
        assert!(validate_config(&config).is_err());
    }
}
