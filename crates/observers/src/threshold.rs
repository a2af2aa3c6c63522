use rootline_core::Observer;

use crate::traits::{CanStopEarly, HasIteration, HasResidual};

/// Stops a solve once every residual is below a bound.
///
/// The solver's own convergence test looks at the step size only. This
/// observer adds a residual test on top, after at least `min_iters`
/// iterations. The iteration that triggers the stop is kept in the history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualThreshold {
    tolerance: f64,
    min_iters: usize,
}

impl ResidualThreshold {
    /// Creates an observer that stops when the largest residual magnitude is
    /// at or below `tolerance`.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_iters: 1,
        }
    }

    /// Requires at least `min_iters` iterations before stopping.
    #[must_use]
    pub fn min_iters(self, min_iters: usize) -> Self {
        Self { min_iters, ..self }
    }
}

impl<E, A> Observer<E, A> for ResidualThreshold
where
    E: HasIteration + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        // NaN residuals compare false and never stop the solve.
        (event.iter() >= self.min_iters && event.residual() <= self.tolerance)
            .then(A::stop_early)
    }
}
