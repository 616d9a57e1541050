use passkeep_core::constant_time::equals_bytes;
use passkeep_core::{PasskeepError, Passphrase};

use crate::cli::{Cli, VerifyArgs};
use crate::config::load_config;
use crate::errors::CliError;
use crate::helpers::{decode_base64, prompt_passphrase, read_pepper};

pub fn handle_verify(cli: &Cli, args: &VerifyArgs) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let pepper = read_pepper()?;
    let salt = decode_base64("salt", &args.salt)?;
    let expected = args.hash.trim();

    let mut attempt = Passphrase::attempt(prompt_passphrase()?);
    let actual = match attempt.hash(&salt, &pepper, &config.hash) {
        Ok(digest) => digest,
        // Stored salts are never shorter than the stored passphrase, so an
        // attempt longer than the salt cannot match.
        Err(PasskeepError::SaltTooShort { .. }) => {
            return Err(CliError::auth_failed("Passphrase does not match").into());
        }
        Err(err) => return Err(err.into()),
    };
    attempt.close();

    if !equals_bytes(
        actual.as_bytes(),
        expected.as_bytes(),
        config.policy.min_element_checks,
    ) {
        tracing::info!("Passphrase verification failed");
        return Err(CliError::auth_failed("Passphrase does not match").into());
    }

    if !cli.quiet {
        println!("Passphrase verified");
    }
    Ok(())
}
