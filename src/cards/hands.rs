use super::hand::Hand;

/// Combinatorial iterator over all n-card hands from a deck.
///
/// Generates all C(k, n) combinations of n cards from the k available cards
/// (those not blocked by the mask). Uses bit-twiddling to generate successive
/// permutations without storing them in memory.
///
/// # Construction
///
/// Created from `(n, mask)` where `n` is the hand size and `mask` is a [`Hand`]
/// of cards to exclude (hero cards, board cards).
///
/// # Performance
///
/// - Memory: O(1), only stores current state
/// - Time per `.next()`: O(1) amortized via Gosper's hack
/// - Deterministic ordering for reproducible iteration
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    /// Total number of combinations, counted from the start.
    ///
    /// Computes C(available, hand_size) using the multiplicative formula.
    pub fn combinations(&self) -> usize {
        let n = crate::DECK_SIZE - Hand::from(self.mask).size();
        let k = self.next.count_ones() as usize;
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }
    fn exhausted(&self) -> bool {
        self.next == 0 || (64 - crate::DECK_SIZE as u32) > self.next.leading_zeros()
    }
    /// Gosper's hack for next bit permutation with same popcount.
    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }
    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.exhausted() || self.next & self.mask == 0 {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        debug_assert!(n > 0);
        let mut this = Self {
            next: (1 << n) - 1,
            mask: u64::from(mask),
        };
        while !this.exhausted() && this.next & this.mask > 0 {
            this.next = this.permute();
        }
        this
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let mut iter = HandIterator::from((3, Hand::from(!0b11111u64)));
        assert!(iter.next() == Some(Hand::from(0b00111u64)));
        assert!(iter.next() == Some(Hand::from(0b01011u64)));
        assert!(iter.next() == Some(Hand::from(0b01101u64)));
        assert!(iter.next() == Some(Hand::from(0b01110u64)));
        assert!(iter.next() == Some(Hand::from(0b10011u64)));
        assert!(iter.next() == Some(Hand::from(0b10101u64)));
        assert!(iter.next() == Some(Hand::from(0b10110u64)));
        assert!(iter.next() == Some(Hand::from(0b11001u64)));
        assert!(iter.next() == Some(Hand::from(0b11010u64)));
        assert!(iter.next() == Some(Hand::from(0b11100u64)));
        assert!(iter.next() == None);
    }

    #[test]
    fn five_choose_three_with_mask() {
        let mask = Hand::from(0b______________________11_0u64);
        let mut iter = HandIterator::from((3, mask));
        assert!(iter.next() == Some(Hand::from(0b0011_00_1u64)));
        assert!(iter.next() == Some(Hand::from(0b0101_00_1u64)));
        assert!(iter.next() == Some(Hand::from(0b0110_00_1u64)));
        assert!(iter.next() == Some(Hand::from(0b0111_00_0u64)));
        assert!(iter.next() == Some(Hand::from(0b1001_00_1u64)));
        assert!(iter.next() == Some(Hand::from(0b1010_00_1u64)));
        assert!(iter.next() == Some(Hand::from(0b1011_00_0u64)));
        assert!(iter.next() == Some(Hand::from(0b1100_00_1u64)));
        assert!(iter.next() == Some(Hand::from(0b1101_00_0u64)));
        assert!(iter.next() == Some(Hand::from(0b1110_00_0u64)));
    }

    #[test]
    fn every_hole_outside_mask() {
        let mask = Hand::try_from("As Ah 2c").unwrap();
        let iter = HandIterator::from((2, mask));
        let n = iter.combinations();
        let holes = iter.collect::<Vec<Hand>>();
        assert_eq!(n, 49 * 48 / 2);
        assert_eq!(holes.len(), n);
        assert!(holes.iter().all(|h| h.size() == 2 && !h.collides(&mask)));
    }
}
