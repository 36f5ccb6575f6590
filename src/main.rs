use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use command::*;

mod command;
mod document;
mod index;

/// Write a sorted `METHOD /path` index of the operations in an OpenAPI document.
#[derive(Parser)]
#[command(author, version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    // `build` when no subcommand is given
    #[clap(flatten)]
    build: Build,
}

#[derive(Subcommand)]
pub enum Command {
    /// Regenerate the index file (the default)
    Build(Build),
    /// Fail if the index file does not match the spec
    Check(Check),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match cli.command {
        Some(Command::Build(b)) => b.run(),
        Some(Command::Check(c)) => c.run(),
        None => cli.build.run(),
    }
}
