use super::card::Card;
use super::hole::Hole;
use super::rank::Rank;
use super::suit::Suit;

/// Suit-normalized hole cards: the 169 strategically distinct starting hands.
///
/// Keeps the two ranks (higher first) and whether the cards share a suit,
/// and forgets which suits they are. Every suited 7-6 maps to `76s`, every
/// pair of sevens to `77`. Pairs are never suited.
///
/// The dense [`index`](Canonical::index) lays the keys out on a 13×13 grid:
/// pairs on the diagonal, offsuit hands below it, suited hands above it.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Canonical {
    high: Rank,
    low: Rank,
    suited: bool,
}

impl Canonical {
    pub fn high(&self) -> Rank {
        self.high
    }
    pub fn low(&self) -> Rank {
        self.low
    }
    pub fn suited(&self) -> bool {
        self.suited
    }
    pub fn index(&self) -> usize {
        let hi = u8::from(self.high) as usize;
        let lo = u8::from(self.low) as usize;
        match self.suited {
            true => lo * 13 + hi,
            false => hi * 13 + lo,
        }
    }
    /// All 169 keys in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..crate::PREFLOP_KEYS).map(Self::from)
    }
    /// Number of physical hole hands sharing this key.
    pub fn combos(&self) -> usize {
        match (self.high == self.low, self.suited) {
            (true, _) => 6,
            (false, true) => 4,
            (false, false) => 12,
        }
    }
    /// One physical hole hand with this key.
    pub fn hole(&self) -> Hole {
        let a = Card::from((self.high, Suit::S));
        let b = match self.suited {
            true => Card::from((self.low, Suit::S)),
            false => Card::from((self.low, Suit::H)),
        };
        Hole::from((a, b))
    }
}

impl From<Hole> for Canonical {
    fn from(hole: Hole) -> Self {
        let (hi, lo) = hole.cards();
        Self {
            high: hi.rank(),
            low: lo.rank(),
            suited: hole.is_suited(),
        }
    }
}

/// usize isomorphism over 0..169
impl From<usize> for Canonical {
    fn from(index: usize) -> Self {
        debug_assert!(index < crate::PREFLOP_KEYS);
        let row = Rank::from((index / 13) as u8);
        let col = Rank::from((index % 13) as u8);
        match row < col {
            true => Self {
                high: col,
                low: row,
                suited: true,
            },
            false => Self {
                high: row,
                low: col,
                suited: false,
            },
        }
    }
}
impl From<Canonical> for usize {
    fn from(key: Canonical) -> Self {
        key.index()
    }
}

/// str isomorphism
/// "AA", "AKs", "AKo"
impl TryFrom<&str> for Canonical {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let chars = s.chars().map(String::from).collect::<Vec<String>>();
        let (a, b, suited) = match chars.as_slice() {
            [a, b] if a == b => (a, b, false),
            [a, b, x] if x == "s" => (a, b, true),
            [a, b, x] if x == "o" => (a, b, false),
            _ => return Err(format!("invalid canonical hand: {}", s)),
        };
        let a = Rank::try_from(a.as_str())?;
        let b = Rank::try_from(b.as_str())?;
        match (a == b, suited) {
            (true, true) => Err(format!("pairs cannot be suited: {}", s)),
            (true, false) if chars.len() == 3 => Err(format!("pairs take no suffix: {}", s)),
            _ => Ok(Self {
                high: a.max(b),
                low: a.min(b),
                suited,
            }),
        }
    }
}

impl std::fmt::Display for Canonical {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.high == self.low, self.suited) {
            (true, _) => write!(f, "{}{}", self.high, self.low),
            (false, true) => write!(f, "{}{}s", self.high, self.low),
            (false, false) => write!(f, "{}{}o", self.high, self.low),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use crate::cards::hands::HandIterator;
    use std::collections::HashMap;

    #[test]
    fn bijective_index() {
        for i in 0..crate::PREFLOP_KEYS {
            assert_eq!(Canonical::from(i).index(), i);
        }
    }

    #[test]
    fn bijective_str() {
        for key in Canonical::all() {
            assert_eq!(Canonical::try_from(key.to_string().as_str()), Ok(key));
        }
        assert!(Canonical::try_from("AAs").is_err());
        assert!(Canonical::try_from("AKx").is_err());
    }

    #[test]
    fn suit_identity_is_forgotten() {
        let a = Canonical::from(Hole::try_from("7s 6s").unwrap());
        let b = Canonical::from(Hole::try_from("6d 7d").unwrap());
        let c = Canonical::from(Hole::try_from("7s 6d").unwrap());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "76s");
        assert_eq!(c.to_string(), "76o");
    }

    #[test]
    fn pairs_are_offsuit() {
        let key = Canonical::from(Hole::try_from("7c 7d").unwrap());
        assert!(!key.suited());
        assert_eq!(key.to_string(), "77");
    }

    #[test]
    fn partitions_all_holes() {
        let mut counts = HashMap::<Canonical, usize>::new();
        for hand in HandIterator::from((2, Hand::empty())) {
            *counts.entry(Canonical::from(Hole::from(hand))).or_default() += 1;
        }
        assert_eq!(counts.len(), crate::PREFLOP_KEYS);
        assert!(counts.iter().all(|(key, n)| key.combos() == *n));
    }

    #[test]
    fn representative_hole_maps_back() {
        for key in Canonical::all() {
            assert_eq!(Canonical::from(key.hole()), key);
        }
    }
}
