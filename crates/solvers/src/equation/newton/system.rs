use rootline_core::{Observer, Point};
use rootline_expr::Expr;

use super::{Action, Config, Diagonal, Error, Event, Solution, iterate::iterate};

/// How the equations of a system drive the two coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One equation corrects both coordinates.
    Single,
    /// The first equation corrects `x`, the second corrects `y`.
    Pair,
}

/// One or two equations, each read as `expr = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationSystem {
    equations: Vec<Expr>,
}

impl EquationSystem {
    /// Creates a system from one or two equations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEquationCount`] for any other number of equations.
    pub fn new(equations: Vec<Expr>) -> Result<Self, Error> {
        match equations.len() {
            1 | 2 => Ok(Self { equations }),
            count => Err(Error::InvalidEquationCount { count }),
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.equations.len() == 1 {
            Mode::Single
        } else {
            Mode::Pair
        }
    }

    /// Returns the equations in order.
    #[must_use]
    pub fn equations(&self) -> &[Expr] {
        &self.equations
    }

    /// Returns the number of equations, always 1 or 2.
    #[must_use]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Always false; a system holds at least one equation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Builds the diagonal derivatives the iteration uses.
    #[must_use]
    pub fn diagonal(&self) -> Diagonal {
        Diagonal::build(self)
    }

    /// Picks the starting point from the caller's guesses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingGuesses`] if there are fewer guesses than
    /// equations, or [`Error::NonFiniteGuess`] if the starting point has a
    /// non-finite coordinate.
    pub fn start(&self, guesses: &[Point]) -> Result<Point, Error> {
        if guesses.len() < self.len() {
            return Err(Error::MissingGuesses {
                equations: self.len(),
                guesses: guesses.len(),
            });
        }

        let point = match self.mode() {
            Mode::Single => guesses[0],
            Mode::Pair => Point::new(guesses[0].x, guesses[1].y),
        };

        if point.is_finite() {
            Ok(point)
        } else {
            Err(Error::NonFiniteGuess { point })
        }
    }

    /// Solves the system from the given guesses.
    ///
    /// See [`solve`](super::solve) for how guesses are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the guesses are unusable or an equation or
    /// derivative cannot be evaluated at an iterate.
    pub fn solve<Obs>(
        &self,
        guesses: &[Point],
        config: &Config,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let start = self.start(guesses)?;
        iterate(self, &self.diagonal(), start, config, observer)
    }
}
