use super::pool::Pool;
use super::tally::Tally;
use crate::Probability;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::strength::Strength;
use rand::Rng;
use std::time::Duration;
use std::time::Instant;

/// How far an estimate got before it stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub probability: Probability,
    pub trials: f64,
    pub confidence: Probability,
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:.4} ± {:.4} over {:.1} trials",
            self.probability, self.confidence, self.trials
        )
    }
}

/// Time-bounded Monte Carlo showdown equity.
///
/// Samples runouts of the unseen board under the royal rule and plays the
/// hero against every opponent in the pool on each one. Stops as soon as
/// either the deadline passes or, after `trials` full-pool runouts, the 95%
/// half-width drops to `tolerance`.
#[derive(Debug, Clone, Copy)]
pub struct MonteCarlo {
    tolerance: Probability,
    trials: usize,
}

impl Default for MonteCarlo {
    fn default() -> Self {
        Self {
            tolerance: crate::EQUITY_TOLERANCE,
            trials: crate::EQUITY_MIN_TRIALS,
        }
    }
}

impl MonteCarlo {
    pub fn tolerance(self, tolerance: Probability) -> Self {
        Self { tolerance, ..self }
    }
    pub fn trials(self, trials: usize) -> Self {
        Self { trials, ..self }
    }

    /// Cards still to come given the board so far. A complete board whose
    /// last card is a face still owes one card.
    pub fn owed(board: Hand, last: Option<Card>) -> usize {
        match crate::BOARD_SIZE.saturating_sub(board.size()) {
            0 if last.is_some_and(|c| c.is_face()) => 1,
            n => n,
        }
    }

    /// Estimate hero's equity against `pool` on `board`.
    ///
    /// `last` is the most recently placed board card; it decides whether a
    /// complete board still owes a card. Opponents that collide with the
    /// hero or the board are dropped up front; an opponent that collides
    /// with a sampled runout sits that runout out. The deadline is only
    /// honored once at least one showdown has been played.
    pub fn estimate<R: Rng>(
        &self,
        rng: &mut R,
        hero: Hole,
        pool: &Pool,
        board: Hand,
        last: Option<Card>,
        duration: Duration,
    ) -> anyhow::Result<Estimate> {
        let hand = Hand::from(hero);
        anyhow::ensure!(!hand.collides(&board), "hole {} overlaps board {}", hero, board);
        let dead = Hand::add(hand, board);
        let pool = pool.without(dead);
        anyhow::ensure!(!pool.is_empty(), "no opponent hand avoids {}", dead);
        let n = Self::owed(board, last);
        let start = Instant::now();
        let mut tally = Tally::new(pool.len());
        loop {
            let runout = Hand::add(board, Deck::without(dead).runout(rng, n));
            let mine = Strength::from(Hand::add(hand, runout));
            pool.iter()
                .filter(|opp| !opp.collides(&runout))
                .map(|opp| Strength::from(Hand::add(*opp, runout)))
                .for_each(|theirs| tally.witness(mine.cmp(&theirs)));
            if tally.comparisons() == 0 {
                continue;
            }
            if start.elapsed() >= duration {
                break;
            }
            if tally.trials() >= self.trials as f64 && tally.confidence() <= self.tolerance {
                break;
            }
        }
        let estimate = Estimate {
            probability: tally.probability(),
            trials: tally.trials(),
            confidence: tally.confidence(),
        };
        log::trace!(
            "{} on {:<16} vs {:>4} | {} in {:.0?}",
            hero,
            board,
            pool.len(),
            estimate,
            start.elapsed()
        );
        Ok(estimate)
    }
}
