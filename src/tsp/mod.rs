//! Symmetric Euclidean traveling-salesman domain.
//!
//! Cities are referenced by index everywhere; coordinates only matter
//! when the distance matrix is built and when a tour is plotted.

mod city;
mod distance;
mod problem;
mod tour;

pub use city::City;
pub use distance::{euclidean, DistanceMatrix};
pub use problem::{solve, SolveError, TourProblem};
pub use tour::Tour;
