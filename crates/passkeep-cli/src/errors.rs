//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use passkeep_core::PasskeepError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file)
    NotFound { message: String, hint: String },

    /// Authentication failed (passphrase does not match)
    AuthFailed { message: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::AuthFailed { message } => write!(f, "{}", message),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error.
    pub fn auth_failed(message: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error bubbling out of a command.
///
/// Rejected or mismatched passphrases count as invalid input; everything
/// else without a typed CLI error exits with 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<PasskeepError>() {
        Some(core_err) if core_err.is_user_facing() => exit_codes::INVALID_INPUT,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use passkeep_core::Rejection;

    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::not_found("missing", "hint").exit_code(), 3);
        assert_eq!(CliError::invalid_input("bad").exit_code(), 4);
        assert_eq!(CliError::auth_failed("nope").exit_code(), 5);
    }

    #[test]
    fn test_exit_code_for_core_errors() {
        let rejected = anyhow::Error::new(PasskeepError::InvalidPassphrase(Rejection::TooShort));
        assert_eq!(exit_code_for(&rejected), exit_codes::INVALID_INPUT);

        let mismatch = anyhow::Error::new(PasskeepError::ConfirmationMismatch);
        assert_eq!(exit_code_for(&mismatch), exit_codes::INVALID_INPUT);

        let internal = anyhow::Error::new(PasskeepError::RetryExhausted { attempts: 30 });
        assert_eq!(exit_code_for(&internal), 1);

        let typed = anyhow::Error::new(CliError::auth_failed("nope"));
        assert_eq!(exit_code_for(&typed), exit_codes::AUTH_FAILED);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Config not found", "Hint: create it");
        assert_eq!(err.to_string(), "Config not found\nHint: create it");
    }
}
