//! Stats command implementation.

use clap::Parser;

/// Stats command arguments.
#[derive(Parser)]
pub struct StatsCommand {
    /// Path to the corpus file
    #[arg(short, long)]
    pub input: String,

    /// Merges to perform before counting pairs
    #[arg(short = 'k', long, default_value_t = 0, allow_negative_numbers = true)]
    pub merges: i64,

    /// Number of pairs to show
    #[arg(short = 'n', long, default_value_t = 10)]
    pub top: usize,
}

use anyhow::Result as AnyhowResult;
use bpelearn_training::{load_corpus, BpeTrainer, PairStatistics, TrainingConfig};
use std::path::Path;

pub fn run(cmd: StatsCommand) -> AnyhowResult<()> {
    let config = TrainingConfig::from_budget(cmd.merges)?;
    let corpus = load_corpus(Path::new(&cmd.input))?;

    let outcome = BpeTrainer::new(config).train(&corpus);
    let vocab = &outcome.vocabulary;
    let stats = PairStatistics::compute(vocab);

    println!("Words: {} distinct, {} total", vocab.len(), vocab.total_count());
    println!("Symbols: {} distinct", vocab.distinct_symbols().len());
    println!("Merges performed: {}", outcome.merges_performed());
    println!("Pairs: {} distinct", stats.len());
    println!();

    for (rank, candidate) in stats.top(cmd.top).iter().enumerate() {
        println!(
            "{:>4}. {} {} : {}",
            rank + 1,
            candidate.pair.0,
            candidate.pair.1,
            candidate.count
        );
    }

    Ok(())
}
