use std::cmp::max;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use passkeep_core::{generate_salt, Passphrase};

use crate::cli::{Cli, HashArgs};
use crate::config::load_config;
use crate::helpers::{prompt_new_passphrase, read_pepper};
use crate::output::HashRecord;

pub fn handle_hash(cli: &Cli, args: &HashArgs) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let pepper = read_pepper()?;
    let (buffer, confirmation) = prompt_new_passphrase()?;

    // The salt may never be shorter than the passphrase it salts.
    let salt_length = max(config.policy.salt_length, buffer.len());
    let checks = config.policy.min_element_checks;
    let mut passphrase = match args.user.as_deref() {
        Some(user) => Passphrase::confirm_for_user(buffer, confirmation, checks, user)?,
        None => Passphrase::confirm(buffer, confirmation, checks)?,
    };

    let salt = generate_salt(salt_length)?;
    let digest = passphrase.hash(&salt, &pepper, &config.hash)?;
    passphrase.close();

    tracing::info!(salt_length, "Passphrase hashed");
    let record = HashRecord::new(&config.hash, STANDARD.encode(&salt), digest);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", record.to_text());
    }
    Ok(())
}
