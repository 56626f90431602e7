//! Preflop Table Binary
//!
//! Regenerates the 169-entry preflop equity table with the royal rule and
//! writes it as JSON.
//!
//! Options: --seed, --tolerance, --trials, --budget, --output

use clap::Parser;
use royal_equity::equity::MonteCarlo;
use royal_equity::equity::Preflop;
use royal_equity::*;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Regenerate the royal hold'em preflop equity table", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = PREFLOP_TOLERANCE)]
    tolerance: Probability,
    #[arg(long, default_value_t = PREFLOP_MIN_TRIALS)]
    trials: usize,
    /// time budget per key, like "500ms", "30s", "5m" or "2h"
    #[arg(long, value_parser = duration)]
    budget: Option<Duration>,
    #[arg(long, default_value = "preflop.json")]
    output: PathBuf,
}

fn duration(s: &str) -> Result<Duration, String> {
    parse_duration(s).ok_or_else(|| format!("invalid duration: {}", s))
}

fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let budget = args.budget.unwrap_or(EQUITY_DEADLINE);
    let montecarlo = MonteCarlo::default()
        .tolerance(args.tolerance)
        .trials(args.trials);
    log::info!(
        "regenerating {} keys (seed {}, tolerance {}, trials {}, budget {:?})",
        PREFLOP_KEYS,
        args.seed,
        args.tolerance,
        args.trials,
        budget
    );
    let start = std::time::Instant::now();
    let preflop = Preflop::regenerate(args.seed, &montecarlo, budget)?;
    log::info!("regenerated in {:.0?}", start.elapsed());
    let drift = preflop
        .table()
        .iter()
        .zip(Preflop::default().table().iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, Probability::max);
    log::info!("largest drift from embedded table {:.4}", drift);
    preflop.save(&args.output)
}
