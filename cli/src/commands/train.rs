//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the corpus file
    #[arg(short, long)]
    pub input: String,

    /// Number of merges (K); prompted for on stdin when omitted
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub merges: Option<i64>,

    /// Also save the final vocabulary as JSON to this path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Enable parallel training
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,
}

use anyhow::Result as AnyhowResult;
use bpelearn_training::{load_corpus, BpeTrainer, TrainingConfig, VocabularySaver};
use std::path::Path;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let corpus = load_corpus(Path::new(&cmd.input))?;

    let config = match cmd.merges {
        Some(k) => TrainingConfig::from_budget(k)?,
        None => TrainingConfig::with_merges(super::prompt_merge_budget()?),
    }
    .parallel(cmd.parallel);

    let budget = config.num_merges;
    let outcome = BpeTrainer::new(config).train(&corpus);
    log::info!(
        "{} of {} merges performed ({:?})",
        outcome.merges_performed(),
        budget,
        outcome.stop_reason
    );

    let saver = VocabularySaver::new(&outcome.vocabulary);
    println!();
    saver.write_listing(std::io::stdout().lock())?;

    if let Some(path) = &cmd.output {
        saver.save_json(Path::new(path))?;
        println!();
        println!("Vocabulary saved to {}", path);
    }

    Ok(())
}
