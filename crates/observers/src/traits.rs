//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events tied to a numbered iteration
//! - [`HasResidual`] — events that carry residual values
//! - [`HasStep`] — events that describe a move between two points
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootline_core::Observer;
//! use rootline_observers::traits::{CanStopEarly, HasIteration, HasStep};
//!
//! struct SmallSteps {
//!     limit: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasIteration + HasStep, A: CanStopEarly> Observer<E, A> for SmallSteps {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let [dx, dy] = event.step();
//!         if event.iter() >= self.min_iters && dx.max(dy) < self.limit {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use rootline_core::Point;
use rootline_solvers::equation::newton;

/// An event tied to a numbered iteration.
pub trait HasIteration {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;
}

/// An event that carries residual values.
pub trait HasResidual {
    /// Returns the residuals, one per equation.
    fn residuals(&self) -> &[f64];

    /// Returns the largest residual magnitude.
    ///
    /// Returns `f64::NAN` if any residual is NaN.
    fn residual(&self) -> f64 {
        self.residuals().iter().fold(0.0, |acc: f64, r| {
            if acc.is_nan() || r.is_nan() {
                f64::NAN
            } else {
                acc.max(r.abs())
            }
        })
    }
}

/// An event that describes a move from one point to the next.
pub trait HasStep {
    /// Returns the point the iteration started from.
    fn prev(&self) -> Point;

    /// Returns the point the iteration moved to.
    fn next(&self) -> Point;

    /// Returns the absolute movement as `[|dx|, |dy|]`.
    fn step(&self) -> [f64; 2] {
        let (prev, next) = (self.prev(), self.next());
        [(next.x - prev.x).abs(), (next.y - prev.y).abs()]
    }
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- newton::Event ---

impl HasIteration for newton::Event<'_> {
    fn iter(&self) -> usize {
        self.record.iter
    }
}

impl HasResidual for newton::Event<'_> {
    fn residuals(&self) -> &[f64] {
        self.record.residuals.as_slice()
    }
}

impl HasStep for newton::Event<'_> {
    fn prev(&self) -> Point {
        self.record.prev
    }

    fn next(&self) -> Point {
        self.record.next
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use newton::{IterationRecord, Residuals};

    fn record(residuals: Residuals) -> IterationRecord {
        IterationRecord {
            iter: 3,
            prev: Point::new(1.0, 2.0),
            next: Point::new(0.5, 2.25),
            residuals,
        }
    }

    #[test]
    fn newton_event_capabilities() {
        let record = record(Residuals::Pair([0.5, -2.0]));
        let event = newton::Event {
            record: &record,
            derivatives: [Some(1.0), Some(1.0)],
        };

        assert_eq!(event.iter(), 3);
        assert_eq!(event.residuals(), &[0.5, -2.0]);
        assert_relative_eq!(event.residual(), 2.0);

        let [dx, dy] = event.step();
        assert_relative_eq!(dx, 0.5);
        assert_relative_eq!(dy, 0.25);
    }

    #[test]
    fn nan_residual_is_reported() {
        let record = record(Residuals::Pair([f64::NAN, 1.0]));
        let event = newton::Event {
            record: &record,
            derivatives: [None, None],
        };
        assert!(event.residual().is_nan());
    }

    #[test]
    fn newton_action_stops_early() {
        assert_eq!(newton::Action::stop_early(), newton::Action::StopEarly);
    }
}
