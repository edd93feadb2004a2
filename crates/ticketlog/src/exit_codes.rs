//! Exit codes for the CLI

use ticketlog_core::TicketlogError;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Commit log input error
pub const INPUT_ERROR: i32 = 3;

/// Map a command failure to its exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<TicketlogError>() {
        Some(TicketlogError::Config(_)) => CONFIG_ERROR,
        Some(TicketlogError::Input(_)) => INPUT_ERROR,
        _ => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketlog_core::{ConfigError, InputError};

    #[test]
    fn test_config_error_code() {
        let err = anyhow::Error::from(TicketlogError::from(ConfigError::MissingField(
            "jira.base_url".to_string(),
        )));
        assert_eq!(for_error(&err), CONFIG_ERROR);
    }

    #[test]
    fn test_other_error_code() {
        assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
    }

    #[test]
    fn test_input_error_code_and_message() {
        let error = serde_json::from_str::<Vec<u8>>("[{").unwrap_err();
        let cause = error.to_string();
        let err = anyhow::Error::from(TicketlogError::from(InputError::Parse {
            source_name: "<stdin>".to_string(),
            error,
        }));

        let message = format!("{:#}", err);
        assert_eq!(message.matches(cause.as_str()).count(), 1);
        assert!(message.starts_with("Malformed commit logs in <stdin>"));
        assert_eq!(for_error(&err), INPUT_ERROR);
    }
}
