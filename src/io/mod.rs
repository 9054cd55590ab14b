//! I/O collaborators around the annealing core.
//!
//! Thin adapters only: coordinate and route parsing, route persistence,
//! the console run summary, and SVG plotting. Nothing here is touched by
//! the optimization loop; output happens strictly after termination.

pub mod input;
pub mod output;
pub mod plot;
