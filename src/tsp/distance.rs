//! Euclidean distance model.

use super::city::City;
use super::tour::Tour;

/// Euclidean distance between two cities.
///
/// Non-negative, symmetric, and zero iff the coordinates are equal.
pub fn euclidean(a: &City, b: &City) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Precomputed pairwise distances for a city set.
///
/// Stored as a flat row-major `n x n` table so the annealing loop never
/// recomputes a square root.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    table: Vec<f64>,
}

impl DistanceMatrix {
    pub fn new(cities: &[City]) -> Self {
        let n = cities.len();
        let mut table = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = euclidean(&cities[i], &cities[j]);
                table[i * n + j] = d;
                table[j * n + i] = d;
            }
        }
        Self { n, table }
    }

    /// Number of cities in the instance.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `i` and `j`.
    ///
    /// Panics on an out-of-range index; callers hold the permutation
    /// invariant, so this is a contract violation rather than a
    /// recoverable error.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "city index out of range");
        self.table[i * self.n + j]
    }

    /// Total length of a closed tour, including the wrap-around edge
    /// from the last city back to the first.
    pub fn tour_length(&self, tour: &Tour) -> f64 {
        let order = tour.as_slice();
        let mut length = 0.0;
        for leg in order.windows(2) {
            length += self.get(leg[0], leg[1]);
        }
        if order.len() > 1 {
            length += self.get(order[order.len() - 1], order[0]);
        }
        length
    }
}
