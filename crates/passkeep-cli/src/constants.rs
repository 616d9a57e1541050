//! Shared constants for the CLI.

/// Environment variable holding the passphrase for non-interactive use.
pub const PASSPHRASE_ENV: &str = "PASSKEEP_PASSPHRASE";

/// Environment variable holding the pepper (standard base64).
pub const PEPPER_ENV: &str = "PASSKEEP_PEPPER";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PASSKEEP_LOG";

/// Log filter used when `PASSKEEP_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Exit codes for specific error conditions.
pub mod exit_codes {
    /// Resource not found (config file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (passphrase does not match).
    pub const AUTH_FAILED: i32 = 5;
}
