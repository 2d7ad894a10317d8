//! CLI commands for the bpelearn trainer.

pub mod stats;
pub mod train;

pub use stats::StatsCommand;
pub use train::TrainCommand;

use anyhow::{Context, Result as AnyhowResult};
use std::io::{BufRead, Write};

/// Ask for the merge budget on stdin, the way the interactive trainer does.
pub(crate) fn prompt_merge_budget() -> AnyhowResult<usize> {
    let stdin = std::io::stdin();
    prompt_merge_budget_from(stdin.lock(), std::io::stdout())
}

fn prompt_merge_budget_from<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> AnyhowResult<usize> {
    write!(output, "Enter number of BPE merges (K): ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read merge budget from stdin")?;

    Ok(bpelearn_training::parse_merge_budget(&line)?)
}
