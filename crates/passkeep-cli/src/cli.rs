use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use passkeep_core::VERSION;

/// Passkeep - confirm, validate and hash passphrases without leaving them in memory
#[derive(Parser)]
#[command(name = "passkeep")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "PASSKEEP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Confirm a new passphrase and print its salted scrypt hash
    Hash(HashArgs),

    /// Check a passphrase against a stored salt and hash
    Verify(VerifyArgs),

    /// Check a passphrase against the complexity rules without hashing it
    Check(CheckArgs),

    /// Generate a random passphrase
    Generate,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the `hash` command
#[derive(Args)]
pub struct HashArgs {
    /// Reject passphrases containing this user name
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `verify` command
#[derive(Args)]
pub struct VerifyArgs {
    /// Stored salt (standard base64)
    #[arg(long)]
    pub salt: String,

    /// Stored hash (standard base64)
    #[arg(long)]
    pub hash: String,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Reject passphrases containing this user name
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,
}
