use crate::Probability;
use std::cmp::Ordering;

/// Running showdown results for one equity query.
///
/// `wins` counts in half-points: a tie adds 1, a win adds 2. `total` counts
/// comparisons, one per surviving opponent per runout. One trial is one
/// runout against the whole pool, so `trials = total / size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tally {
    wins: u64,
    total: u64,
    size: usize,
}

impl Tally {
    /// Empty tally for a pool of `size` opponent hands.
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0);
        Self {
            wins: 0,
            total: 0,
            size,
        }
    }
    /// Record one hero-versus-opponent showdown.
    pub fn witness(&mut self, hero: Ordering) {
        self.total += 1;
        self.wins += match hero {
            Ordering::Greater => 2,
            Ordering::Equal => 1,
            Ordering::Less => 0,
        };
    }
    pub fn comparisons(&self) -> u64 {
        self.total
    }
    pub fn trials(&self) -> f64 {
        self.total as f64 / self.size as f64
    }
    pub fn probability(&self) -> Probability {
        debug_assert!(self.total > 0, "no showdowns witnessed");
        self.wins as Probability / 2.0 / self.total as Probability
    }
    /// Half-width of the normal-approximation 95% interval around
    /// [`probability`](Self::probability).
    pub fn confidence(&self) -> Probability {
        match self.total {
            0 => Probability::INFINITY,
            _ => {
                let p = self.probability();
                crate::EQUITY_Z * (p * (1.0 - p)).sqrt() / self.trials().sqrt()
            }
        }
    }
}
