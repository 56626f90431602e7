use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// The undealt part of the deck, drawn from by rejection sampling.
///
/// Tracks every card that may not come out again: the dead cards it was
/// built around plus everything drawn since. Each draw picks a uniform
/// position in `0..52` and retries while that card is used, so a draw is
/// uniform over what remains. The generator is always passed in, so a
/// seeded generator replays the same cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    used: Hand,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self::without(Hand::empty())
    }
    /// A deck that never deals any of the `dead` cards.
    pub fn without(dead: Hand) -> Self {
        Self { used: dead }
    }
    /// Cards that can still be drawn.
    pub fn remaining(&self) -> Hand {
        self.used.complement()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        !self.used.contains(card)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        debug_assert!(self.used.size() < crate::DECK_SIZE);
        loop {
            let card = Card::from(rng.random_range(0..crate::DECK_SIZE as u8));
            if !self.used.contains(&card) {
                self.used.insert(card);
                return card;
            }
        }
    }
    /// Draws exactly `n` cards.
    pub fn deal<R: Rng>(&mut self, rng: &mut R, n: usize) -> Hand {
        debug_assert!(self.used.size() + n <= crate::DECK_SIZE);
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// Draws `n` cards under the royal rule: while the last card drawn is a
    /// face card, one more is drawn.
    ///
    /// Only cards drawn here can extend the runout. Whether the board's own
    /// last card asks for a card is the caller's decision, made once when
    /// choosing `n`.
    pub fn runout<R: Rng>(&mut self, rng: &mut R, n: usize) -> Hand {
        let mut hand = Hand::empty();
        let mut n = n;
        let mut i = 0;
        while i < n {
            let card = self.draw(rng);
            hand.insert(card);
            i += 1;
            if i == n && card.is_face() && self.used.size() < crate::DECK_SIZE {
                n += 1;
            }
        }
        hand
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.remaining()
    }
}
