use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two cards are present.
/// The predicates below are the shape features a preflop heuristic cares
/// about; [`Canonical`] keeps just enough of them to key the preflop table.
///
/// [`Canonical`]: super::canonical::Canonical
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// Higher card first. Equal ranks order by suit.
    pub fn cards(&self) -> (Card, Card) {
        let mut hand = self.0;
        let lo = hand.next();
        let hi = hand.next();
        match (hi, lo) {
            (Some(hi), Some(lo)) => (hi, lo),
            _ => unreachable!("hole holds two cards"),
        }
    }
    pub fn is_suited(&self) -> bool {
        let (a, b) = self.cards();
        a.suit() == b.suit()
    }
    pub fn is_paired(&self) -> bool {
        let (a, b) = self.cards();
        a.rank() == b.rank()
    }
    /// Adjacent ranks. The ace does not wrap around to the deuce.
    pub fn is_connected(&self) -> bool {
        let (a, b) = self.cards();
        u8::from(a.rank()) == u8::from(b.rank()) + 1
    }
    /// At least one queen or better.
    pub fn has_high_card(&self) -> bool {
        let (a, _) = self.cards();
        a.rank() >= Rank::Queen
    }
    /// Any one of the four shape features above.
    pub fn is_playable(&self) -> bool {
        self.is_suited() || self.is_paired() || self.is_connected() || self.has_high_card()
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hand> for Hole {
    fn from(hand: Hand) -> Self {
        debug_assert!(hand.size() == 2);
        Self(hand)
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = u64::from(cards.0);
        let b = u64::from(cards.1);
        debug_assert!(a != b);
        Self(Hand::from(a | b))
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        match hand.size() {
            2 => Ok(Self(hand)),
            _ => Err("hand must contain exactly two cards".into()),
        }
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        let a = rand::random_range(0..crate::DECK_SIZE as u8);
        let b = (a + rand::random_range(1..crate::DECK_SIZE as u8)) % crate::DECK_SIZE as u8;
        Self::from((Card::from(a), Card::from(b)))
    }
}
