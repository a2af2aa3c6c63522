use thiserror::Error;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    /// At most 100 iterations with a step tolerance of `1e-7`.
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-7,
        }
    }
}

impl Config {
    /// Creates a new config with validated limits.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tolerance` is not a finite
    /// positive number.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step tolerance.
    ///
    /// The solver has converged once both coordinates move by less than this
    /// in a single iteration.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
