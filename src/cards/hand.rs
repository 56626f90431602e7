use super::card::Card;
use super::suit::Suit;

/// An unordered set of cards as a 64-bit bitmask.
///
/// Only the low 52 bits are used; bit `i` is set when card `i` is present.
/// The same type stands in for hole cards, boards, dead cards, sampled
/// runouts and opponent candidates, so collision checks are one `&`.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
    /// Disjoint union. Overlapping inputs are a caller error.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// True when the two sets share at least one card.
    pub fn collides(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }
    /// Cards of one suit, still positioned as in the full deck.
    pub fn of(&self, suit: &Suit) -> Self {
        Self(self.0 & u64::from(*suit))
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    /// Scatter the low bits of `dense` onto the set bits of this Hand.
    ///
    /// Bit `i` of `dense` selects the `i`-th lowest card of `self`, so
    /// walking `dense` through every k-bit pattern below `1 << self.size()`
    /// walks every k-card subset of `self`. This is `pdep`; the BMI2
    /// instruction is used when the target has it.
    pub fn deposit(&self, dense: u64) -> Self {
        #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
        {
            // SAFETY: guarded by target_feature = "bmi2" at compile time
            Self(unsafe { core::arch::x86_64::_pdep_u64(dense, self.0) })
        }
        #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
        {
            let mut sparse = self.0;
            let mut dense = dense;
            let mut bits = 0u64;
            while sparse != 0 && dense != 0 {
                let lowest = sparse & sparse.wrapping_neg();
                if dense & 1 == 1 {
                    bits |= lowest;
                }
                sparse ^= lowest;
                dense >>= 1;
            }
            Self(bits)
        }
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            n => {
                let card = Card::from(n.trailing_zeros() as u8);
                self.remove(card);
                Some(card)
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000001000100000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from(cards.as_slice())
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(
            cards
                .iter()
                .map(|c| u64::from(*c))
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// str isomorphism
/// duplicate cards are rejected rather than silently merged
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        let hand = Self::from(cards.as_slice());
        match hand.size() == cards.len() {
            true => Ok(hand),
            false => Err(format!("duplicate cards in {}", s)),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        Self::from(rand::random::<u64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Card::try_from("2c").ok());
        assert_eq!(iter.next(), Card::try_from("Ts").ok());
        assert_eq!(iter.next(), Card::try_from("Jc").ok());
        assert_eq!(iter.next(), Card::try_from("Js").ok());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(hand.of(&Suit::C)), 0b_1000100010001); // C (2c, 6c, Tc, Ac)
        assert_eq!(u16::from(hand.of(&Suit::D)), 0b_0001000100010); // D (3d, 7d, Jd)
        assert_eq!(u16::from(hand.of(&Suit::H)), 0b_0010001000100); // H (4h, 8h, Qh)
        assert_eq!(u16::from(hand.of(&Suit::S)), 0b_0100010001000); // S (5s, 9s, Ks)
    }

    #[test]
    fn rejects_duplicates() {
        assert!(Hand::try_from("As Kd As").is_err());
    }

    #[test]
    fn deposit_scatters_onto_present_cards() {
        let hand = Hand::from(0b1010_0110u64);
        assert_eq!(hand.deposit(0b0001), Hand::from(0b0000_0010u64));
        assert_eq!(hand.deposit(0b0110), Hand::from(0b0010_0100u64));
        assert_eq!(hand.deposit(0b1111), hand);
        assert_eq!(hand.deposit(0), Hand::empty());
    }

    #[test]
    fn deposit_stays_within_hand() {
        for _ in 0..256 {
            let hand = Hand::random();
            let dense = rand::random::<u64>();
            let subset = hand.deposit(dense);
            assert_eq!(u64::from(subset) & !u64::from(hand), 0);
            assert_eq!(subset.size(), (dense & ((1u64 << hand.size()) - 1)).count_ones() as usize);
        }
    }
}
