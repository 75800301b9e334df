// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

mod cli;
mod config;
mod emit;
mod environment;
mod validate;

use clap::Parser;

use crate::cli::{check::CheckCommand, emit::EmitCommand, new::NewCommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Create a new sitepress configuration file.
    #[command(visible_alias = "n")]
    New(NewCommand),

    /// Parse and validate a configuration file.
    #[command(visible_alias = "c")]
    Check(CheckCommand),

    /// Print the generator configuration document as JSON.
    #[command(visible_alias = "e")]
    Emit(EmitCommand),
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::New(command) => crate::cli::new::new_config(command)?,
        Command::Check(command) => crate::cli::check::check(command)?,
        Command::Emit(command) => crate::cli::emit::emit(command)?,
    };
    Ok(())
}
