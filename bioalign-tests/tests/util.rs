use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use anyhow::{Result, anyhow};
use bioalign::{align, show};
use clap::Parser;
use lib_bioalign::AlignmentResult;

/// Runs a `bioalign` subcommand as if it was called from the repository root.
///
/// Relative paths in `args` are resolved against the repository root.
pub fn run_in_repo_root(args: &str) -> Result<()> {
    let args = args
        .split_whitespace()
        .map(|arg| {
            if arg.starts_with("test_files/") {
                repo_root().join(arg).to_string_lossy().into_owned()
            } else {
                arg.to_string()
            }
        })
        .collect::<Vec<_>>();

    match args.first().map(String::as_str) {
        Some("align") => align::cli(align::Cli::try_parse_from(args)?),
        Some("show") => show::cli(show::Cli::try_parse_from(args)?),
        other => Err(anyhow!("Unknown subcommand {other:?}")),
    }
}

pub fn repo_root() -> PathBuf {
    // The manifest directory is this crate, a.k.a. "[...]/bioalign-tests".
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// A fresh path in the temporary directory, unique within this test process.
pub fn temporary_file(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let directory = env::temp_dir().join(format!("bioalign-tests-{}", std::process::id()));
    fs::create_dir_all(&directory).expect("temporary directory should be creatable");
    directory.join(format!(
        "{}-{name}",
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ))
}

pub fn read_alignment(path: &Path) -> Result<AlignmentResult> {
    Ok(toml::from_str(&fs::read_to_string(path)?)?)
}
