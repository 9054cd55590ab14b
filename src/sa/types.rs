//! Core trait for the annealing engine.

use rand::Rng;

/// Defines a problem for the annealing engine.
///
/// The implementor supplies the starting solution, the cost function,
/// and neighbor generation; the engine owns temperature management, the
/// acceptance criterion, and cooling. All randomness comes from the
/// generator the engine passes in, so a seeded run is reproducible.
///
/// # Minimization
///
/// The engine minimizes the cost function. For maximization, negate the
/// cost.
///
/// # Examples
///
/// ```ignore
/// struct TourProblem { distances: DistanceMatrix }
///
/// impl AnnealProblem for TourProblem {
///     type Solution = Tour;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> Tour {
///         Tour::random(self.distances.len(), rng)
///     }
///
///     fn cost(&self, tour: &Tour) -> f64 {
///         self.distances.tour_length(tour)
///     }
///
///     fn neighbor<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
///         tour.reversed_segment(rng)
///     }
/// }
/// ```
pub trait AnnealProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Creates the starting solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a candidate neighbor of the current solution.
    ///
    /// Must not mutate `solution`: a rejected candidate is discarded and
    /// the current solution lives on. The neighborhood must be connected
    /// (any solution reachable from any other via a sequence of moves).
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
