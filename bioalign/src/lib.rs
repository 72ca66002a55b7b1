//! Command line front end of `lib_bioalign`.
//!
//! Each subcommand lives in its own module and exposes a clap `Cli` together with a `cli` function,
//! so that the integration tests can drive them without spawning a process.

use log::{LevelFilter, warn};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

pub mod align;
pub mod show;

/// Installs the terminal logger.
///
/// When several subcommands run in one process, the first logger stays and later calls only warn.
fn initialise_logging(log_level: LevelFilter) {
    if let Err(error) = TermLogger::init(
        log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        warn!("Keeping the existing logger: {error}");
    }
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::initialise_logging;

    #[test]
    fn repeated_logging_initialisation_keeps_running() {
        initialise_logging(LevelFilter::Warn);
        initialise_logging(LevelFilter::Info);
        assert!(log::max_level() >= LevelFilter::Warn);
    }
}
