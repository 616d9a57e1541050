use passkeep_core::Passphrase;

use crate::cli::{CheckArgs, Cli};
use crate::helpers::prompt_passphrase;

pub fn handle_check(cli: &Cli, args: &CheckArgs) -> anyhow::Result<()> {
    let buffer = prompt_passphrase()?;
    let mut passphrase = match args.user.as_deref() {
        Some(user) => Passphrase::create_for_user(buffer, user)?,
        None => Passphrase::create(buffer)?,
    };
    passphrase.close();

    if !cli.quiet {
        println!("Passphrase meets the complexity requirements");
    }
    Ok(())
}
