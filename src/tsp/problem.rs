//! The tour-length minimization problem and its solve entry point.

use rand::Rng;
use thiserror::Error;

use super::city::City;
use super::distance::DistanceMatrix;
use super::tour::Tour;
use crate::sa::{AnnealConfig, AnnealProblem, AnnealResult, AnnealRunner, ConfigError, StopReason};

/// Preconditions rejected before optimization starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// A closed tour needs at least two cities.
    #[error("need at least 2 cities, got {0}")]
    TooFewCities(usize),

    /// Invalid annealing parameters.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A supplied starting tour whose length does not match the instance.
    #[error("starting tour visits {got} cities, instance has {expected}")]
    StartingTourMismatch { expected: usize, got: usize },
}

/// A symmetric Euclidean TSP instance ready for annealing.
///
/// Holds the precomputed distance matrix and, optionally, a caller-chosen
/// starting tour; the coordinates themselves are not retained.
#[derive(Debug, Clone)]
pub struct TourProblem {
    matrix: DistanceMatrix,
    start: Option<Tour>,
}

impl TourProblem {
    pub fn new(cities: &[City]) -> Result<Self, SolveError> {
        if cities.len() < 2 {
            return Err(SolveError::TooFewCities(cities.len()));
        }
        Ok(Self {
            matrix: DistanceMatrix::new(cities),
            start: None,
        })
    }

    /// Uses `tour` as the starting solution instead of a random
    /// permutation.
    pub fn with_starting_tour(mut self, tour: Tour) -> Result<Self, SolveError> {
        if tour.len() != self.matrix.len() {
            return Err(SolveError::StartingTourMismatch {
                expected: self.matrix.len(),
                got: tour.len(),
            });
        }
        self.start = Some(tour);
        Ok(self)
    }

    pub fn num_cities(&self) -> usize {
        self.matrix.len()
    }

    /// Length of a closed tour over this instance.
    pub fn tour_length(&self, tour: &Tour) -> f64 {
        self.matrix.tour_length(tour)
    }
}

impl AnnealProblem for TourProblem {
    type Solution = Tour;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Tour {
        match &self.start {
            Some(tour) => tour.clone(),
            None => Tour::random(self.matrix.len(), rng),
        }
    }

    fn cost(&self, tour: &Tour) -> f64 {
        self.matrix.tour_length(tour)
    }

    fn neighbor<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
        tour.reversed_segment(rng)
    }
}

/// Anneals `problem` and returns the best tour found.
///
/// A two-city instance has a single closed tour; it is returned
/// immediately without entering the loop.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::AnnealConfig;
/// use tsp_anneal::tsp::{solve, City, TourProblem};
///
/// let cities = [
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 1.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 1.0, 0.0),
/// ];
/// let problem = TourProblem::new(&cities)?;
/// let result = solve(&problem, &AnnealConfig::default().with_seed(7))?;
/// assert!(result.best_cost >= 4.0);
/// # Ok::<(), tsp_anneal::tsp::SolveError>(())
/// ```
pub fn solve(
    problem: &TourProblem,
    config: &AnnealConfig,
) -> Result<AnnealResult<Tour>, SolveError> {
    config.validate()?;

    if problem.num_cities() == 2 {
        let tour = problem
            .start
            .clone()
            .unwrap_or_else(|| Tour::identity(2));
        let length = problem.tour_length(&tour);
        return Ok(AnnealResult {
            best: tour,
            best_cost: length,
            iterations: 0,
            final_temperature: config.initial_temperature,
            stop_reason: StopReason::Converged,
            accepted_moves: 0,
            improving_moves: 0,
            cost_history: vec![length],
        });
    }

    Ok(AnnealRunner::run(problem, config)?)
}
