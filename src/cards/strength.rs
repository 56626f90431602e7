use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;
use super::subsets::Subsets;

/// A fully-evaluated hand strength for comparison.
///
/// Combines a [`Ranking`] (hand category like flush or two pair) with
/// [`Kickers`] (tie-breaking cards). Ordering is lexicographic: ranking
/// first, then kickers. Only the ordering means anything.
///
/// Built from any [`Hand`] of five or more cards. Hands of up to seven
/// cards go straight to the [`Evaluator`]. Royal boards can push a hand
/// past seven cards; then every 7-card subset is evaluated and the best
/// one wins.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        debug_assert!(hand.size() >= 5);
        match hand.size() <= crate::NATIVE_SIZE {
            true => Self::from(Evaluator::from(hand)),
            false => Subsets::from((crate::NATIVE_SIZE, hand))
                .map(Evaluator::from)
                .map(Self::from)
                .max()
                .unwrap_or_else(|| unreachable!("at least one subset")),
        }
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let value = e.find_ranking();
        let kicks = e.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.value, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;
    use crate::cards::hands::HandIterator;
    use crate::cards::rank::Rank;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// brute force: mask out every (n - 7)-card complement instead of
    /// depositing dense indices
    fn naive(hand: Hand) -> Strength {
        let n = hand.size();
        HandIterator::from((n - crate::NATIVE_SIZE, hand.complement()))
            .map(|drop| Hand::from(u64::from(hand) & !u64::from(drop)))
            .map(Evaluator::from)
            .map(Strength::from)
            .max()
            .unwrap()
    }

    fn sample(rng: &mut SmallRng, n: usize) -> Hand {
        Deck::new().deal(rng, n)
    }

    #[test]
    fn identity_up_to_seven() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for n in 5..=7 {
            for _ in 0..500 {
                let hand = sample(rng, n);
                assert_eq!(Strength::from(hand), Strength::from(Evaluator::from(hand)));
            }
        }
    }

    #[test]
    fn best_subset_beyond_seven() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        for n in 8..=11 {
            for _ in 0..50 {
                let hand = sample(rng, n);
                assert_eq!(Strength::from(hand), naive(hand));
            }
        }
    }

    #[test]
    fn extra_board_card_can_improve() {
        // Ks Qh Jd extended the board to Ts; only the eighth card completes Broadway
        let hand = Hand::try_from("7s 2c 2h 2d Ks Qh Jd Ts").unwrap();
        assert_eq!(Strength::from(hand).ranking(), Ranking::ThreeOAK(Rank::Two));
        let hand = Hand::try_from("As 2c 2h 2d Ks Qh Jd Ts").unwrap();
        assert_eq!(Strength::from(hand).ranking(), Ranking::Straight(Rank::Ace));
    }
}
