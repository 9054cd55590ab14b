//! Annealing execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{AnnealConfig, ConfigError};
use super::types::AnnealProblem;

/// Temperatures at or below this reject every worsening move outright,
/// so the acceptance probability never divides by zero.
const TEMPERATURE_EPSILON: f64 = 1e-12;

/// How often (in iterations) the best cost is sampled into the history.
const HISTORY_INTERVAL: usize = 100;

/// Why the annealing loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Temperature fell below the configured minimum.
    Converged,
    /// The iteration cap was reached before the temperature floor.
    IterationLimitReached,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (candidate evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Which stopping condition fired.
    pub stop_reason: StopReason,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted moves that strictly improved the current cost.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals for history tracking.
    pub cost_history: Vec<f64>,
}

/// Metropolis acceptance criterion.
///
/// A candidate that is at least as good (`delta <= 0`) is always
/// accepted; a worsening one is accepted with probability
/// `exp(-delta / temperature)`.
pub fn metropolis<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta <= 0.0 {
        return true;
    }
    if temperature <= TEMPERATURE_EPSILON {
        return false;
    }
    let probability = (-delta / temperature).exp();
    rng.random_range(0.0..1.0) < probability
}

/// Executes the annealing loop.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the optimization.
    ///
    /// One candidate move is generated and judged per iteration, and the
    /// temperature is recomputed from the schedule after every step. The
    /// loop stops when the temperature drops below the configured floor
    /// or the iteration cap is hit, whichever comes first.
    ///
    /// Fails fast on invalid configuration; nothing inside the loop
    /// errors, and a rejected candidate is normal control flow.
    pub fn run<P: AnnealProblem>(
        problem: &P,
        config: &AnnealConfig,
    ) -> Result<AnnealResult<P::Solution>, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = problem.initial_solution(&mut rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = vec![best_cost];

        let mut step = 0usize;
        let stop_reason = loop {
            if temperature < config.min_temperature {
                break StopReason::Converged;
            }
            if step >= config.max_iterations {
                break StopReason::IterationLimitReached;
            }

            let candidate = problem.neighbor(&current, &mut rng);
            let candidate_cost = problem.cost(&candidate);
            let delta = candidate_cost - current_cost;

            if metropolis(delta, temperature, &mut rng) {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            step += 1;
            temperature = config.temperature_at(step);

            if step % HISTORY_INTERVAL == 0 {
                cost_history.push(best_cost);
            }
        };

        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        Ok(AnnealResult {
            best,
            best_cost,
            iterations: step,
            final_temperature: temperature,
            stop_reason,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}
