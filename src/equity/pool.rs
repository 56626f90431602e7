use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::hole::Hole;

/// The opponent hands we consider plausible, each a 2-card [`Hand`].
///
/// Either supplied by the caller or synthesized as every 2-card combination
/// that avoids a set of forbidden cards. Read-only during a query; the
/// estimator filters it against hero and board once, and against every
/// sampled runout on the fly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool(Vec<Hand>);

impl Pool {
    /// Every 2-card hand that uses none of the `forbidden` cards.
    pub fn except(forbidden: Hand) -> Self {
        Self(HandIterator::from((2, forbidden)).collect())
    }
    /// Drop hands that share a card with `dead`.
    pub fn without(&self, dead: Hand) -> Self {
        Self(
            self.0
                .iter()
                .copied()
                .filter(|hand| !hand.collides(&dead))
                .collect(),
        )
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Hand> {
        self.0.iter()
    }
}

impl From<Vec<Hole>> for Pool {
    fn from(holes: Vec<Hole>) -> Self {
        Self(holes.into_iter().map(Hand::from).collect())
    }
}
impl From<Hole> for Pool {
    fn from(hole: Hole) -> Self {
        Self(vec![Hand::from(hole)])
    }
}

impl FromIterator<Hole> for Pool {
    fn from_iter<I: IntoIterator<Item = Hole>>(iter: I) -> Self {
        Self(iter.into_iter().map(Hand::from).collect())
    }
}
