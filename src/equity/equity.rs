use super::montecarlo::Estimate;
use super::montecarlo::MonteCarlo;
use super::pool::Pool;
use super::preflop::Preflop;
use crate::Probability;
use crate::cards::canonical::Canonical;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use rand::Rng;
use std::time::Duration;

/// Showdown equity for the decision layer.
///
/// Before the flop this is a table lookup. After it, the hero is played
/// against a pool of opponent hands by Monte Carlo until the estimate is
/// tight enough or the time budget runs out. Owns the generator it samples
/// with, so a seeded generator makes every query reproducible.
pub struct Equity<R: Rng> {
    rng: R,
    preflop: Preflop,
    montecarlo: MonteCarlo,
}

impl<R: Rng> Equity<R> {
    pub fn new(rng: R, preflop: Preflop) -> Self {
        Self {
            rng,
            preflop,
            montecarlo: MonteCarlo::default(),
        }
    }
    /// Target 95% half-width for post-flop estimates.
    pub fn tolerance(self, tolerance: Probability) -> Self {
        Self {
            montecarlo: self.montecarlo.tolerance(tolerance),
            ..self
        }
    }
    /// Full-pool runouts required before an estimate may stop early.
    pub fn trials(self, trials: usize) -> Self {
        Self {
            montecarlo: self.montecarlo.trials(trials),
            ..self
        }
    }

    /// Equity against every hand the opponent could hold.
    pub fn equity(&mut self, hole: Hole, board: &[Card], duration: Duration) -> anyhow::Result<Probability> {
        let public = Self::validate(hole, board)?;
        match board.is_empty() {
            true => Ok(self.preflop.get(Canonical::from(hole))),
            false => {
                let pool = Pool::except(Hand::add(Hand::from(hole), public));
                self.simulate(hole, public, board.last().copied(), &pool, duration)
                    .map(|estimate| estimate.probability)
            }
        }
    }

    /// Equity against an explicit range of opponent hands.
    ///
    /// Always simulated, even preflop, since the table assumes a uniformly
    /// random opponent.
    pub fn against(
        &mut self,
        hole: Hole,
        board: &[Card],
        pool: &Pool,
        duration: Duration,
    ) -> anyhow::Result<Estimate> {
        let public = Self::validate(hole, board)?;
        self.simulate(hole, public, board.last().copied(), pool, duration)
    }

    /// [`equity`](Self::equity) over cards written like `"As"` or `"T♥"`.
    /// Board cards are given in the order they were dealt.
    pub fn parse(&mut self, hole: [&str; 2], board: &[&str], duration: Duration) -> anyhow::Result<Probability> {
        let a = Card::try_from(hole[0]).map_err(anyhow::Error::msg)?;
        let b = Card::try_from(hole[1]).map_err(anyhow::Error::msg)?;
        anyhow::ensure!(a != b, "hole cards {} and {} are the same card", a, b);
        let board = board
            .iter()
            .map(|s| Card::try_from(*s).map_err(anyhow::Error::msg))
            .collect::<anyhow::Result<Vec<Card>>>()?;
        self.equity(Hole::from((a, b)), &board, duration)
    }

    fn simulate(
        &mut self,
        hole: Hole,
        public: Hand,
        last: Option<Card>,
        pool: &Pool,
        duration: Duration,
    ) -> anyhow::Result<Estimate> {
        self.montecarlo
            .estimate(&mut self.rng, hole, pool, public, last, duration)
    }

    /// The board as a set, once it is known to hold distinct cards that
    /// miss the hole and leave room for an opponent.
    fn validate(hole: Hole, board: &[Card]) -> anyhow::Result<Hand> {
        let public = Hand::from(board);
        anyhow::ensure!(public.size() == board.len(), "board {} repeats a card", public);
        anyhow::ensure!(
            !Hand::from(hole).collides(&public),
            "hole {} overlaps board {}",
            hole,
            public
        );
        anyhow::ensure!(
            board.len() + 4 <= crate::DECK_SIZE,
            "board of {} cards leaves no room for an opponent",
            board.len()
        );
        Ok(public)
    }
}

impl<R: Rng + rand::SeedableRng> Equity<R> {
    /// Embedded preflop table and a generator seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed), Preflop::default())
    }
}
