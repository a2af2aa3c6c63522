use rootline_core::Observer;

use crate::traits::{HasIteration, HasResidual, HasStep};

/// An observer that logs every iteration as a `tracing` event at `DEBUG`.
///
/// The observer never acts; it only reports. Install a subscriber (for
/// example `tracing_subscriber::fmt`) to see the output.
///
/// # Example
///
/// ```ignore
/// let solution = newton::solve(&equations, &guesses, &config, TracingObserver::new("f1"))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct TracingObserver {
    label: String,
    events: usize,
}

impl TracingObserver {
    /// Creates an observer whose events carry `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            events: 0,
        }
    }

    /// Returns the label attached to each event.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of iterations logged so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<E, A> Observer<E, A> for TracingObserver
where
    E: HasIteration + HasResidual + HasStep,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        let (prev, next) = (event.prev(), event.next());
        let [dx, dy] = event.step();
        tracing::debug!(
            label = %self.label,
            iter = event.iter(),
            x = prev.x,
            y = prev.y,
            next_x = next.x,
            next_y = next.y,
            residual = event.residual(),
            dx,
            dy,
            "iteration"
        );
        None
    }
}

/// Allows `&mut TracingObserver` to be passed to solvers that take an observer
/// by value, so [`TracingObserver::events`] can be read after the solve.
impl<E, A> Observer<E, A> for &mut TracingObserver
where
    E: HasIteration + HasResidual + HasStep,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootline_core::Point;
    use rootline_expr::parse_equation;
    use rootline_solvers::equation::newton::{self, Config};

    #[test]
    fn logs_every_iteration_without_acting() {
        let equations = [parse_equation("x^2 - 2").unwrap()];
        let mut observer = TracingObserver::new("sqrt two");

        let solution = newton::solve(
            &equations,
            &[Point::new(1.0, 1.0)],
            &Config::default(),
            &mut observer,
        )
        .unwrap();

        assert!(solution.is_converged());
        assert_eq!(observer.events(), solution.iters());
        assert_eq!(observer.label(), "sqrt two");
    }
}
