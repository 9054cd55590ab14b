//! Closed-tour optimization for 2-D point sets via simulated annealing.
//!
//! Given a set of cities (index plus 2-D coordinate), the crate searches
//! for a short closed tour visiting every city exactly once:
//!
//! - **`sa`**: the annealing engine — a problem trait, cooling schedules,
//!   the Metropolis acceptance criterion, and the incumbent-tracking
//!   execution loop.
//! - **`tsp`**: the tour domain — Euclidean distances, the permutation
//!   tour representation with its 2-opt candidate move, and the
//!   [`tsp::solve`] entry point.
//! - **`io`**: thin collaborators around the core — coordinate/route file
//!   parsing, route persistence, the console run summary, and SVG
//!   plotting. Nothing in this module runs inside the optimization loop.
//!
//! # Architecture
//!
//! The engine in `sa` is generic over [`sa::AnnealProblem`] and knows
//! nothing about tours; `tsp` implements that trait and is the only
//! module that understands coordinates. All randomness flows through an
//! explicitly seeded generator, so runs are reproducible end to end.

pub mod io;
pub mod sa;
pub mod tsp;
