use rootline_core::{Observer, Point};

use super::{
    Action, Config, Diagonal, EquationSystem, Error, Event, History, IterationRecord, Outcome,
    Reason, Solution, evaluate::evaluate,
};

/// Runs the iteration from `start` until it converges, degenerates, is
/// stopped, or exhausts the iteration limit.
pub(super) fn iterate<Obs>(
    system: &EquationSystem,
    diagonal: &Diagonal,
    start: Point,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut history = History::with_capacity(config.max_iters().min(64));
    let mut point = start;

    for iter in 1..=config.max_iters() {
        let eval = evaluate(system, diagonal, point).map_err(|source| Error::Eval {
            iter,
            point,
            source,
        })?;

        if let Some(variable) = eval.degenerate() {
            let reason = Reason::DegenerateDerivative {
                at: point,
                variable,
            };
            return Ok(not_found(reason, history));
        }

        let record = IterationRecord {
            iter,
            prev: point,
            next: eval.next_point(),
            residuals: eval.residuals,
        };
        history.push(record);

        let event = Event {
            record: &record,
            derivatives: eval.derivatives,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(not_found(Reason::StoppedByObserver, history));
        }

        if record.is_converged(config.tolerance()) {
            return Ok(Solution {
                outcome: Outcome::Converged { root: record.next },
                history,
            });
        }

        point = record.next;
    }

    Ok(not_found(Reason::MaxIters, history))
}

fn not_found(reason: Reason, history: History) -> Solution {
    Solution {
        outcome: Outcome::NotFound { reason },
        history,
    }
}
