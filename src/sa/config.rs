//! Annealing configuration and cooling schedules.

use thiserror::Error;

/// Rejected annealing parameters, surfaced before the loop starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The initial temperature must be strictly positive.
    #[error("initial_temperature must be positive, got {0}")]
    NonPositiveInitialTemperature(f64),

    /// The stopping floor must be strictly positive.
    #[error("min_temperature must be positive, got {0}")]
    NonPositiveMinTemperature(f64),

    /// The stopping floor must lie below the starting temperature.
    #[error("min_temperature {min} must be less than initial_temperature {initial}")]
    MinNotBelowInitial { min: f64, initial: f64 },

    /// Geometric decay only cools for rates strictly inside (0, 1).
    #[error("geometric decay rate must be in (0, 1), got {0}")]
    DecayRateOutOfRange(f64),

    /// Lundy-Mees only cools for positive beta.
    #[error("lundy-mees beta must be positive, got {0}")]
    NonPositiveBeta(f64),

    /// A zero iteration cap would never run a single move.
    #[error("max_iterations must be positive")]
    ZeroMaxIterations,
}

/// Cooling schedule: a deterministic map from step index to temperature.
///
/// Every policy is monotonically non-increasing in the step index and
/// stays non-negative.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) decay: `T(step) = T0 * rate^step`.
    ///
    /// The reference policy. Typical `rate`: 0.95-0.999; higher is
    /// slower cooling.
    Geometric {
        /// Decay rate in (0, 1).
        rate: f64,
    },

    /// Linear decay: `T(step) = T0 - step * (T0 - T_min) / max_iterations`,
    /// floored at `T_min`.
    ///
    /// Fixed total duration; temperature decreases uniformly.
    Linear,

    /// Lundy-Mees decay: `T(step) = T0 / (1 + step * beta * T0)`.
    ///
    /// Cools fast at high temperature, slow at low temperature.
    ///
    /// Reference: Lundy & Mees (1986)
    LundyMees {
        /// Cooling parameter. Typically `(T0 - T_min) / (max_iter * T0 * T_min)`.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { rate: 0.995 }
    }
}

/// Configuration for an annealing run.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::{AnnealConfig, CoolingSchedule};
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(50.0)
///     .with_min_temperature(0.01)
///     .with_cooling(CoolingSchedule::Geometric { rate: 0.99 })
///     .with_max_iterations(10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Stopping floor: the run ends once the temperature drops below this.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Hard cap on iterations (one candidate move per iteration).
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 1e-3,
            cooling: CoolingSchedule::default(),
            max_iterations: 50_000,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Temperature at the given step index.
    ///
    /// Deterministic given the configuration, and non-increasing in
    /// `step` for every schedule.
    pub fn temperature_at(&self, step: usize) -> f64 {
        let t0 = self.initial_temperature;
        match self.cooling {
            CoolingSchedule::Geometric { rate } => t0 * rate.powf(step as f64),

            CoolingSchedule::Linear => {
                let span = t0 - self.min_temperature;
                (t0 - step as f64 * span / self.max_iterations as f64).max(self.min_temperature)
            }

            CoolingSchedule::LundyMees { beta } => t0 / (1.0 + step as f64 * beta * t0),
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_temperature <= 0.0 {
            return Err(ConfigError::NonPositiveInitialTemperature(
                self.initial_temperature,
            ));
        }
        if self.min_temperature <= 0.0 {
            return Err(ConfigError::NonPositiveMinTemperature(self.min_temperature));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(ConfigError::MinNotBelowInitial {
                min: self.min_temperature,
                initial: self.initial_temperature,
            });
        }
        match self.cooling {
            CoolingSchedule::Geometric { rate } => {
                if rate <= 0.0 || rate >= 1.0 {
                    return Err(ConfigError::DecayRateOutOfRange(rate));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if beta <= 0.0 {
                    return Err(ConfigError::NonPositiveBeta(beta));
                }
            }
            CoolingSchedule::Linear => {}
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }
        Ok(())
    }
}
