//! Tour representation and the 2-opt candidate move.

use rand::seq::SliceRandom;
use rand::Rng;

/// An ordered visiting sequence over city indices `0..n`.
///
/// The tour is implicitly closed: the last city connects back to the
/// first. Invariant: the sequence is a permutation — every index appears
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// The identity permutation `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly random permutation.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self(order)
    }

    /// Builds a tour from an explicit visiting order.
    ///
    /// Returns `None` unless `order` is a permutation of
    /// `0..order.len()`.
    pub fn from_order(order: Vec<usize>) -> Option<Self> {
        let mut seen = vec![false; order.len()];
        for &city in &order {
            if city >= order.len() || seen[city] {
                return None;
            }
            seen[city] = true;
        }
        Some(Self(order))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The visiting order as a slice of city indices.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// 2-opt candidate move: picks two distinct positions uniformly at
    /// random and reverses the inclusive segment between them.
    ///
    /// The current tour is left untouched, and the candidate is always a
    /// valid permutation of the same index set.
    ///
    /// Requires a tour of at least two cities.
    pub fn reversed_segment<R: Rng>(&self, rng: &mut R) -> Self {
        let n = self.0.len();
        debug_assert!(n >= 2, "segment reversal needs at least two positions");

        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n);
        while j == i {
            j = rng.random_range(0..n);
        }
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };

        let mut candidate = self.clone();
        candidate.0[lo..=hi].reverse();
        candidate
    }
}

impl std::ops::Index<usize> for Tour {
    type Output = usize;

    fn index(&self, position: usize) -> &usize {
        &self.0[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_permutation(tour: &Tour) -> bool {
        let mut seen = vec![false; tour.len()];
        for &city in tour.as_slice() {
            if city >= tour.len() || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }

    #[test]
    fn test_identity_order() {
        let tour = Tour::identity(4);
        assert_eq!(tour.as_slice(), &[0, 1, 2, 3]);
        assert!(is_permutation(&tour));
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in 2..30 {
            assert!(is_permutation(&Tour::random(n, &mut rng)));
        }
    }

    #[test]
    fn test_indexed_access() {
        let tour = Tour::from_order(vec![2, 0, 1]).unwrap();
        assert_eq!(tour[0], 2);
        assert_eq!(tour[2], 1);
    }

    #[test]
    fn test_from_order_rejects_duplicate() {
        assert!(Tour::from_order(vec![0, 1, 1]).is_none());
    }

    #[test]
    fn test_from_order_rejects_out_of_range() {
        assert!(Tour::from_order(vec![0, 1, 3]).is_none());
    }

    #[test]
    fn test_from_order_accepts_permutation() {
        let tour = Tour::from_order(vec![3, 1, 0, 2]).unwrap();
        assert_eq!(tour.as_slice(), &[3, 1, 0, 2]);
    }

    #[test]
    fn test_reversal_changes_order_and_keeps_original() {
        let mut rng = StdRng::seed_from_u64(9);
        let tour = Tour::identity(6);
        for _ in 0..100 {
            let candidate = tour.reversed_segment(&mut rng);
            // reversing a segment of distinct values always reorders it
            assert_ne!(candidate, tour);
            assert_eq!(tour.as_slice(), &[0, 1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_reversal_on_pair_swaps() {
        let mut rng = StdRng::seed_from_u64(11);
        let tour = Tour::identity(2);
        let candidate = tour.reversed_segment(&mut rng);
        assert_eq!(candidate.as_slice(), &[1, 0]);
    }

    proptest! {
        #[test]
        fn prop_reversed_segment_is_permutation(n in 2usize..64, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let tour = Tour::random(n, &mut rng);
            let candidate = tour.reversed_segment(&mut rng);
            prop_assert!(is_permutation(&candidate));
            prop_assert_eq!(candidate.len(), n);
        }
    }
}
