//! Input helper functions for the CLI.

use std::io::IsTerminal;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dialoguer::Password;
use zeroize::{Zeroize, Zeroizing};

use passkeep_core::passphrase::MIN_PEPPER_LENGTH;
use passkeep_core::SecretBuffer;

use crate::constants::{PASSPHRASE_ENV, PEPPER_ENV};
use crate::errors::CliError;

/// Prompt for a passphrase, or read it from PASSKEEP_PASSPHRASE.
pub fn prompt_passphrase() -> anyhow::Result<SecretBuffer> {
    if let Some(buffer) = env_passphrase() {
        return Ok(buffer);
    }
    ensure_terminal()?;
    read_hidden("Passphrase")
}

/// Prompt for a new passphrase and its confirmation.
///
/// With PASSKEEP_PASSPHRASE set, the same value is used for both.
pub fn prompt_new_passphrase() -> anyhow::Result<(SecretBuffer, SecretBuffer)> {
    if let Some(buffer) = env_passphrase() {
        let confirmation = buffer.clone();
        return Ok((buffer, confirmation));
    }
    ensure_terminal()?;
    let passphrase = read_hidden("Enter passphrase")?;
    let confirmation = read_hidden("Confirm passphrase")?;
    Ok((passphrase, confirmation))
}

/// Decode the pepper from PASSKEEP_PEPPER.
pub fn read_pepper() -> anyhow::Result<Zeroizing<Vec<u8>>> {
    let encoded = Zeroizing::new(std::env::var(PEPPER_ENV).map_err(|_| {
        CliError::invalid_input(format!("No pepper provided. Set {} (standard base64).", PEPPER_ENV))
    })?);
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| CliError::invalid_input(format!("{} is not valid base64: {}", PEPPER_ENV, e)))?;
    let bytes = Zeroizing::new(bytes);
    if bytes.len() < MIN_PEPPER_LENGTH {
        return Err(CliError::invalid_input(format!(
            "{} must decode to at least {} bytes (got {})",
            PEPPER_ENV,
            MIN_PEPPER_LENGTH,
            bytes.len()
        ))
        .into());
    }
    Ok(bytes)
}

/// Decode a standard base64 argument.
pub fn decode_base64(label: &str, value: &str) -> anyhow::Result<Vec<u8>> {
    STANDARD
        .decode(value.trim())
        .map_err(|e| CliError::invalid_input(format!("Invalid {} (expected base64): {}", label, e)).into())
}

fn env_passphrase() -> Option<SecretBuffer> {
    let mut value = std::env::var(PASSPHRASE_ENV).ok()?;
    if value.trim().is_empty() {
        value.zeroize();
        return None;
    }
    Some(SecretBuffer::from(value))
}

fn ensure_terminal() -> anyhow::Result<()> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(CliError::invalid_input(format!(
            "No passphrase provided and no TTY available. Set {}.",
            PASSPHRASE_ENV
        ))
        .into())
    }
}

fn read_hidden(prompt: &str) -> anyhow::Result<SecretBuffer> {
    Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map(SecretBuffer::from)
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_base64() {
        assert_eq!(decode_base64("salt", "AAEC").unwrap(), vec![0, 1, 2]);
        assert_eq!(decode_base64("salt", " AAEC\n").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_decode_base64_invalid_is_input_error() {
        let err = decode_base64("salt", "not base64!").unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("typed error");
        assert_eq!(cli_err.exit_code(), 4);
        assert!(err.to_string().contains("Invalid salt"));
    }
}
