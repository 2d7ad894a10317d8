//! Bpelearn CLI - Command-line interface for the BPE merge trainer.
//!
//! This is the main entry point for the `bpelearn` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{StatsCommand, TrainCommand};

#[derive(Parser)]
#[command(name = "bpelearn")]
#[command(about = "Learn BPE merges over a whitespace-tokenized corpus", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease log verbosity (-q warn, -qq error)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train merges on a corpus and print the final vocabulary
    Train(TrainCommand),
    /// Show the most frequent adjacent pairs after K merges
    Stats(StatsCommand),
}

fn init_logging(verbose: u8, quiet: u8) {
    use env_logger::Env;

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    if let Some(level) = verbosity_override(verbose, quiet) {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

/// Level forced by `-v`/`-q`; `None` leaves `RUST_LOG` in charge.
fn verbosity_override(verbose: u8, quiet: u8) -> Option<log::LevelFilter> {
    use log::LevelFilter;

    match (quiet, verbose) {
        (0, 0) => None,
        (0, 1) => Some(LevelFilter::Debug),
        (0, _) => Some(LevelFilter::Trace),
        (1, _) => Some(LevelFilter::Warn),
        _ => Some(LevelFilter::Error),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Stats(cmd) => commands::stats::run(cmd)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_no_flags_defers_to_environment() {
        assert_eq!(verbosity_override(0, 0), None);
    }

    #[test]
    fn test_flags_override_level() {
        assert_eq!(verbosity_override(1, 0), Some(LevelFilter::Debug));
        assert_eq!(verbosity_override(3, 0), Some(LevelFilter::Trace));
        assert_eq!(verbosity_override(0, 1), Some(LevelFilter::Warn));
        assert_eq!(verbosity_override(2, 2), Some(LevelFilter::Error));
    }
}
