//! Time-bounded equity estimation for royal hold'em.
//!
//! Royal hold'em deals community cards exactly like hold'em, except that a
//! face card (J, Q, K) in the last board position forces one more card onto
//! the board, recursively, until a non-face card closes it. Boards can
//! therefore grow past five cards, and so can the hands we evaluate.
//!
//! ## Modules
//!
//! - [`cards`] — bitmask card primitives, hand evaluation, random runouts
//! - [`equity`] — Monte Carlo estimation, the preflop table, and the
//!   [`Equity`](equity::Equity) entry point
pub mod cards;
pub mod equity;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win probability at showdown, ties counted as half a win.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DECK PARAMETERS
// ============================================================================
/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;
/// Number of suits; a card id is `rank * SUITS + suit`.
pub const SUITS: usize = 4;
/// Community cards dealt before the royal extension kicks in.
pub const BOARD_SIZE: usize = 5;
/// Largest hand the native evaluator accepts.
pub const NATIVE_SIZE: usize = 7;

// ============================================================================
// MONTE CARLO ESTIMATION
// Stop once the 95% half-width falls under tolerance or the clock runs out.
// ============================================================================
/// Normal quantile for a two-sided 95% confidence interval.
pub const EQUITY_Z: Probability = 1.96;
/// Default half-width of the confidence interval the decision loop asks for.
pub const EQUITY_TOLERANCE: Probability = 2e-3;
/// Minimum number of full-pool trials before early stopping is allowed.
pub const EQUITY_MIN_TRIALS: usize = 100;
/// Wall-clock budget when a caller has no better estimate of its own.
pub const EQUITY_DEADLINE: std::time::Duration = std::time::Duration::from_secs(60);

// ============================================================================
// PREFLOP TABLE GENERATION
// Offline only. The embedded table was produced with these settings.
// ============================================================================
/// Number of strategically distinct hole hands.
pub const PREFLOP_KEYS: usize = 169;
/// Half-width used when regenerating the table.
pub const PREFLOP_TOLERANCE: Probability = 5e-4;
/// Minimum full-pool trials per key when regenerating the table.
pub const PREFLOP_MIN_TRIALS: usize = 1000;
/// Bumped whenever the embedded table or its key layout changes.
pub const PREFLOP_VERSION: u32 = 1;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

/// Parse duration string like "500ms", "30s", "5m", "2h" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        return ms.parse().ok().map(std::time::Duration::from_millis);
    }
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        _ => None,
    }
}
