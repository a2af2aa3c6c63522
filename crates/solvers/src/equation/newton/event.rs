use super::IterationRecord;

/// Event emitted by the Newton solver after each completed iteration.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The record just appended to the history.
    pub record: &'a IterationRecord,

    /// Diagonal derivative values at `record.prev`, as `[∂/∂x, ∂/∂y]`.
    ///
    /// `None` marks a coordinate held fixed for the whole solve.
    pub derivatives: [Option<f64>; 2],
}
