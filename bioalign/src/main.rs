use anyhow::Result;
use bioalign::{align, show};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Align two sequences globally or locally.
    Align(align::Cli),

    /// Render an alignment written by `bioalign align --output`.
    Show(show::Cli),
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Align(cli) => align::cli(cli),
        Command::Show(cli) => show::cli(cli),
    }
}
