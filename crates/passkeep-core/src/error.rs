//! Error types for passkeep core operations.
//!
//! Every failure the primitives can report lives in one enum. Variants are
//! descriptive at the core level; the CLI layer maps them to exit codes and
//! user-facing messages.

use std::fmt;

use thiserror::Error;

/// Result type alias for passkeep operations.
pub type Result<T> = std::result::Result<T, PasskeepError>;

/// Why a passphrase was rejected by the complexity policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Fewer characters than the policy minimum
    TooShort,
    /// Neither mixed-case alphanumeric nor international
    InsufficientComplexity,
    /// Contains the account's user name (case-insensitive)
    ContainsUserName,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rejection::TooShort => "passphrase is too short",
            Rejection::InsufficientComplexity => {
                "passphrase needs lower and upper case letters and a digit"
            }
            Rejection::ContainsUserName => "passphrase contains the user name",
        };
        write!(f, "{label}")
    }
}

/// Core error type for passkeep operations.
#[derive(Debug, Error)]
pub enum PasskeepError {
    /// A view window was malformed
    #[error("Invalid range: {start}..{end} over {len} elements")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// A view was read outside its window
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A required argument was unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The passphrase failed validation
    #[error("Passphrase rejected: {0}")]
    InvalidPassphrase(Rejection),

    /// Passphrase and confirmation differ
    #[error("Passphrases did not match")]
    ConfirmationMismatch,

    /// Salt shorter than the secret it salts
    #[error("Salt must be at least {required} bytes (got {actual})")]
    SaltTooShort { required: usize, actual: usize },

    /// Pepper shorter than the minimum
    #[error("Pepper must be at least {required} bytes (got {actual})")]
    PepperTooShort { required: usize, actual: usize },

    /// A hashing cost parameter was out of range
    #[error("Invalid hash parameter: {0}")]
    InvalidParameter(String),

    /// The passphrase was already closed
    #[error("Passphrase has been shredded")]
    PassphraseShredded,

    /// Random generation never produced an acceptable passphrase
    #[error("Random passphrase failed validation {attempts} times; the policy or entropy source is broken")]
    RetryExhausted { attempts: usize },

    /// The OS random source failed
    #[error("Entropy error: {0}")]
    Entropy(String),

    /// Key derivation failed
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl From<getrandom::Error> for PasskeepError {
    fn from(err: getrandom::Error) -> Self {
        PasskeepError::Entropy(err.to_string())
    }
}

impl PasskeepError {
    /// True for failures a user can fix by typing a different passphrase.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            PasskeepError::InvalidPassphrase(_) | PasskeepError::ConfirmationMismatch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let err = PasskeepError::InvalidPassphrase(Rejection::TooShort);
        assert_eq!(err.to_string(), "Passphrase rejected: passphrase is too short");

        let err = PasskeepError::InvalidPassphrase(Rejection::ContainsUserName);
        assert!(err.to_string().contains("user name"));
    }

    #[test]
    fn test_user_facing_classification() {
        assert!(PasskeepError::ConfirmationMismatch.is_user_facing());
        assert!(PasskeepError::InvalidPassphrase(Rejection::TooShort).is_user_facing());
        assert!(!PasskeepError::PassphraseShredded.is_user_facing());
        assert!(!PasskeepError::RetryExhausted { attempts: 30 }.is_user_facing());
    }

    #[test]
    fn test_salt_message_reports_lengths() {
        let err = PasskeepError::SaltTooShort {
            required: 9,
            actual: 4,
        };
        assert_eq!(err.to_string(), "Salt must be at least 9 bytes (got 4)");
    }
}
