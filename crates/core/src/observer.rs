/// Receives solver events and decides how the iteration should proceed.
///
/// A solver hands every event to its observer and keeps going unless the
/// observer answers with an action. This is how callers log, trace, or cut a
/// solve short without the solver knowing about any of it.
///
/// Returning `Some(action)` requests a solver-specific action; `None` lets the
/// solver continue unchanged.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the no-op
/// observer used by the `*_unobserved` solver entry points.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O>(mut observer: O, events: usize) -> Vec<&'static str>
    where
        O: Observer<usize, &'static str>,
    {
        (1..=events).filter_map(|e| observer.observe(&e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), 5).is_empty());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let actions = drive(
            |event: &usize| {
                seen.push(*event);
                (*event == 3).then_some("stop")
            },
            4,
        );

        assert_eq!(actions, vec!["stop"]);
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }
}
