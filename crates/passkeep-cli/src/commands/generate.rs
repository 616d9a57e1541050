use secrecy::ExposeSecret;

use passkeep_core::Passphrase;

use crate::cli::Cli;
use crate::config::load_config;

pub fn handle_generate(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let mut passphrase = Passphrase::generate_random(config.policy.min_element_checks)?;
    {
        let text = passphrase.expose_for_legacy()?;
        println!("{}", text.expose_secret());
    }
    passphrase.close();
    Ok(())
}
