use super::hand::Hand;

/// Every k-card subset of a given Hand, each exactly once.
///
/// Where [`HandIterator`] walks the deck and skips masked cards, this walks
/// a dense k-bit index `x` through `0..1 << n` (n = cards in the Hand) in
/// increasing order with the next-same-popcount trick, and deposits each
/// index onto the Hand's own cards. No index is ever rejected, so the cost
/// is exactly C(n, k) deposits.
///
/// [`HandIterator`]: super::hands::HandIterator
pub struct Subsets {
    over: Hand,
    next: u64,
    stop: u64,
}

impl Subsets {
    pub fn combinations(&self) -> usize {
        let n = self.over.size();
        let k = self.next.count_ones() as usize;
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }
    fn advance(&mut self) {
        let x = self.next;
        let c = x & x.wrapping_neg();
        let r = x + c;
        self.next = (((r ^ x) >> 2) / c) | r;
    }
}

impl Iterator for Subsets {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        match self.next < self.stop {
            false => None,
            true => {
                let hand = self.over.deposit(self.next);
                self.advance();
                Some(hand)
            }
        }
    }
}

/// choose k cards out of the Hand
impl From<(usize, Hand)> for Subsets {
    fn from((k, over): (usize, Hand)) -> Self {
        debug_assert!(k > 0 && k <= over.size());
        Self {
            over,
            next: (1 << k) - 1,
            stop: 1 << over.size(),
        }
    }
}
