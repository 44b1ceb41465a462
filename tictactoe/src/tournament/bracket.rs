//! First-round bracket construction.

use rand::{Rng, seq::SliceRandom};
use serde::Serialize;

/// Ordered first-round pairings. Later rounds are not tracked.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bracket<T> {
    pairs: Vec<(T, T)>,
}

impl<T> Bracket<T> {
    pub fn pairs(&self) -> &[(T, T)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Bracket<U> {
        Bracket {
            pairs: self.pairs.iter().map(|(a, b)| (f(a), f(b))).collect(),
        }
    }
}

impl<T> IntoIterator for Bracket<T> {
    type Item = (T, T);
    type IntoIter = std::vec::IntoIter<(T, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// Pair entrants in order: 0 with 1, 2 with 3, and so on. An odd entrant out
/// is dropped.
pub fn pair_sequential<T>(entrants: Vec<T>) -> Bracket<T> {
    let mut pairs = Vec::with_capacity(entrants.len() / 2);
    let mut iter = entrants.into_iter();
    while let (Some(a), Some(b)) = (iter.next(), iter.next()) {
        pairs.push((a, b));
    }
    Bracket { pairs }
}

/// Shuffle entrants with `rng` and pair them sequentially.
pub fn build_bracket<T>(mut entrants: Vec<T>, rng: &mut impl Rng) -> Bracket<T> {
    entrants.shuffle(rng);
    pair_sequential(entrants)
}
