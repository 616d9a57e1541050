//! Passkeep CLI - confirm, validate and hash passphrases from a terminal
//!
//! This is the command-line interface for passkeep. It is a thin driver over
//! the core primitives; all secret handling happens in `passkeep-core`.

mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::{check, generate, hash, misc, verify};
use crate::errors::exit_code_for;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing() {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code_for(&e));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Hash(args) => hash::handle_hash(cli, args),
        Commands::Verify(args) => verify::handle_verify(cli, args),
        Commands::Check(args) => check::handle_check(cli, args),
        Commands::Generate => generate::handle_generate(cli),
        Commands::Completions { shell } => misc::handle_completions(*shell),
    }
}
