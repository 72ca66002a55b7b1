use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use lib_bioalign::{AlignmentMode, AlignmentResult, ScoringModel};
use log::{LevelFilter, debug, info};

use crate::initialise_logging;

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The query sequence. It is aligned along the rows of the alignment matrix.
    #[clap(long, short = 'q')]
    query: String,

    /// The subject sequence. It is aligned along the columns of the alignment matrix.
    #[clap(long, short = 's')]
    subject: String,

    /// The alignment mode, either `global` or `local` (or `1` and `2` respectively).
    #[clap(long, short = 'm', default_value = "global")]
    mode: AlignmentMode,

    /// A scoring file in plain text format.
    ///
    /// Without it, the default scores are used.
    /// Any of the score options below overrides the respective entry of this file.
    #[clap(long, short = 'c')]
    scoring: Option<PathBuf>,

    #[clap(long, allow_negative_numbers = true)]
    match_score: Option<f64>,

    #[clap(long, allow_negative_numbers = true)]
    mismatch_score: Option<f64>,

    /// The score of the first character of a gap.
    #[clap(long, allow_negative_numbers = true)]
    gap_open_score: Option<f64>,

    /// The score of each further character of a gap.
    #[clap(long, allow_negative_numbers = true)]
    gap_extend_score: Option<f64>,

    /// Compare the sequences as given instead of converting them to upper case.
    #[clap(long)]
    keep_case: bool,

    /// The file to store the alignment in toml format.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    let scoring = cli.scoring_model()?;
    debug!("Using scoring model {scoring:?}");

    let (query, subject) = if cli.keep_case {
        (cli.query.clone(), cli.subject.clone())
    } else {
        (cli.query.to_uppercase(), cli.subject.to_uppercase())
    };

    info!(
        "Computing {} alignment of {} query and {} subject characters",
        cli.mode,
        query.chars().count(),
        subject.chars().count()
    );
    let alignment = cli.mode.align(&query, &subject, &scoring)?;

    if let Some(output) = &cli.output {
        write_toml(output, &alignment)?;
    }

    println!("{alignment}");

    Ok(())
}

impl Cli {
    fn scoring_model(&self) -> Result<ScoringModel> {
        let mut scoring = if let Some(path) = &self.scoring {
            info!("Loading scoring file {path:?}");
            let file = File::open(path)
                .with_context(|| format!("Error opening scoring file {path:?}"))?;
            ScoringModel::read_plain(BufReader::new(file))
                .with_context(|| format!("Error reading scoring file {path:?}"))?
        } else {
            ScoringModel::default()
        };

        if let Some(match_score) = self.match_score {
            scoring.match_score = match_score;
        }
        if let Some(mismatch_score) = self.mismatch_score {
            scoring.mismatch_score = mismatch_score;
        }
        if let Some(gap_open_score) = self.gap_open_score {
            scoring.gap_open_score = gap_open_score;
        }
        if let Some(gap_extend_score) = self.gap_extend_score {
            scoring.gap_extend_score = gap_extend_score;
        }

        scoring.verify()?;
        Ok(scoring)
    }
}

fn write_toml(output: &Path, alignment: &AlignmentResult) -> Result<()> {
    info!("Writing alignment to {output:?}");
    let mut output = BufWriter::new(
        File::create(output).with_context(|| format!("Error creating output file {output:?}"))?,
    );
    write!(output, "{}", toml::to_string(alignment)?)?;
    output.flush()?;

    Ok(())
}
