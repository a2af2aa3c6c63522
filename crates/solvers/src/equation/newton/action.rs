/// Control actions supported by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver after the current iteration.
    ///
    /// The iteration's record is kept and the solve ends with
    /// [`Reason::StoppedByObserver`](super::Reason::StoppedByObserver).
    StopEarly,
}
