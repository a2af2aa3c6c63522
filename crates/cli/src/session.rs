use std::io::{BufRead, Write};

use rootline_core::Point;
use rootline_expr::{Expr, parse_equation};
use rootline_observers::TracingObserver;
use rootline_solvers::equation::newton::{self, Config, EquationSystem, Outcome, Solution};
use tracing::info;

use crate::{CliError, Result, table::HistoryTable};

const EXAMPLE: &str = "4*x^2 - y^3 + 28 = 0";

/// One equation as entered by the user.
struct Entry {
    index: usize,
    equation: Expr,
    guess: Point,
}

/// An interactive solve: prompts on `output`, reads answers from `input`.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    system: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session that solves each equation independently.
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
            system: false,
        }
    }

    /// Solves the equations together as one system instead.
    #[must_use]
    pub fn system(self, system: bool) -> Self {
        Self { system, ..self }
    }

    /// Returns the output writer, consuming the session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the prompts, solves, and prints the results.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends early, an answer is malformed, an
    /// equation does not parse, or the solver fails to evaluate an equation.
    pub fn run(&mut self) -> Result<()> {
        let count = self.ask_count()?;

        if self.system {
            let entries = (1..=count)
                .map(|index| self.ask_entry(index))
                .collect::<Result<Vec<_>>>()?;
            self.solve_system(entries)
        } else {
            // Each equation is reported before the next one is read.
            (1..=count).try_for_each(|index| {
                let entry = self.ask_entry(index)?;
                self.solve_one(entry)
            })
        }
    }

    fn solve_one(&mut self, entry: Entry) -> Result<()> {
        info!(equation = %entry.equation, "solving equation {}", entry.index);
        let system = EquationSystem::new(vec![entry.equation])?;
        let observer = TracingObserver::new(format!("equation {}", entry.index));
        let solution = system.solve(&[entry.guess], &self.config, observer)?;
        self.report(&format!("equation {}", entry.index), &system, &solution)
    }

    fn solve_system(&mut self, entries: Vec<Entry>) -> Result<()> {
        let (equations, guesses): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .map(|entry| (entry.equation, entry.guess))
            .unzip();
        info!(count = equations.len(), "solving system");
        let system = EquationSystem::new(equations)?;
        let solution = system.solve(&guesses, &self.config, TracingObserver::new("system"))?;
        self.report("the system", &system, &solution)
    }

    fn report(
        &mut self,
        subject: &str,
        system: &EquationSystem,
        solution: &Solution,
    ) -> Result<()> {
        let table = HistoryTable::new(&solution.history, system.mode());
        match solution.outcome {
            Outcome::Converged { root } => {
                writeln!(
                    self.output,
                    "\nRoot found for {subject}: x = {}, y = {}",
                    root.x, root.y
                )?;
                writeln!(self.output, "Iterations:")?;
                write!(self.output, "{table}")?;
            }
            Outcome::NotFound { reason } => {
                writeln!(self.output, "\nNo root found for {subject}: {reason}.")?;
                if !solution.history.is_empty() {
                    writeln!(self.output, "Iterations:")?;
                    write!(self.output, "{table}")?;
                }
            }
        }
        Ok(())
    }

    fn ask_count(&mut self) -> Result<usize> {
        let text = self.ask("Number of equations: ", "the number of equations")?;
        let count = text
            .parse::<usize>()
            .map_err(|_| CliError::InvalidNumber {
                what: "the number of equations".to_string(),
                text: text.clone(),
            })?;

        match (count, self.system) {
            (0, _) => Err(CliError::InvalidCount(
                "at least one equation is needed".to_string(),
            )),
            (1 | 2, true) | (_, false) => Ok(count),
            (count, true) => Err(CliError::InvalidCount(format!(
                "a system holds 1 or 2 equations, got {count}"
            ))),
        }
    }

    fn ask_entry(&mut self, index: usize) -> Result<Entry> {
        let text = self.ask(
            &format!("Equation {index} (in x and y, ^ for powers, e.g. {EXAMPLE}): "),
            &format!("equation {index}"),
        )?;
        let equation =
            parse_equation(&text).map_err(|source| CliError::Parse { index, source })?;

        let x = self.ask_number(&format!("initial x for equation {index}"))?;
        let y = self.ask_number(&format!("initial y for equation {index}"))?;

        Ok(Entry {
            index,
            equation,
            guess: Point::new(x, y),
        })
    }

    fn ask_number(&mut self, what: &str) -> Result<f64> {
        let mut prompt = what.to_string();
        if let Some(first) = prompt.get_mut(..1) {
            first.make_ascii_uppercase();
        }
        let text = self.ask(&format!("{prompt}: "), what)?;
        text.parse::<f64>().map_err(|_| CliError::InvalidNumber {
            what: what.to_string(),
            text,
        })
    }

    /// Writes `prompt` and reads one trimmed line.
    fn ask(&mut self, prompt: &str, what: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput(what.to_string()));
        }
        Ok(line.trim().to_string())
    }
}
