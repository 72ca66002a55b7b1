use std::{
    fs::File,
    io::{Read, Write, stdout},
    path::PathBuf,
};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use lib_bioalign::AlignmentResult;
use log::{LevelFilter, info};

use crate::initialise_logging;

pub mod tri_line;

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// Path to a toml output file of `bioalign align`.
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// Insert a space after this many alignment columns.
    #[clap(long, default_value = "10")]
    spacing: usize,

    /// The number of alignment columns per block.
    #[clap(long, short = 'w', default_value = "30")]
    line_width: usize,

    /// Print only the symbol line of each block.
    #[clap(long)]
    hide_sequences: bool,

    /// Write the rendering to this file instead of stdout.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);
    ensure!(cli.spacing > 0, "The spacing must be positive");
    ensure!(cli.line_width > 0, "The line width must be positive");

    info!("Reading bioalign output toml file {:?}", cli.input);
    let mut buffer = String::new();
    File::open(&cli.input)
        .with_context(|| format!("Error opening input file {:?}", cli.input))?
        .read_to_string(&mut buffer)
        .with_context(|| format!("Error reading input file {:?}", cli.input))?;
    let alignment: AlignmentResult = toml::from_str(&buffer)
        .with_context(|| format!("Error parsing input file {:?}", cli.input))?;

    let rendered = tri_line::render(
        &alignment,
        &tri_line::RenderOptions {
            spacing: cli.spacing,
            line_width: cli.line_width,
            show_sequences: !cli.hide_sequences,
        },
    );

    if let Some(output) = &cli.output {
        info!("Writing rendered alignment to {output:?}");
        File::create(output)
            .with_context(|| format!("Error creating output file {output:?}"))?
            .write_all(rendered.as_bytes())?;
    } else {
        stdout().write_all(rendered.as_bytes())?;
    }

    Ok(())
}
