/// Watches solver events and optionally steers the solve.
///
/// A solver calls [`Observer::observe`] once per event. Returning `None`
/// leaves the solve untouched; returning `Some(action)` hands the solver one
/// of its own control actions, such as stopping early.
///
/// Narration, history capture and custom stopping rules all live in observers
/// so the solvers themselves stay free of side effects.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Handles one event, returning an action for the solver if needed.
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

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    fn drive<O: Observer<u32, Stop>>(observer: &mut O, events: &[u32]) -> Option<usize> {
        events
            .iter()
            .position(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive(&mut (), &[1, 2, 3]), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let mut seen = Vec::new();
        let mut observer = |event: &u32| {
            seen.push(*event);
            (*event == 2).then_some(Stop::Now)
        };

        assert_eq!(drive(&mut observer, &[1, 2, 3]), Some(1));
        assert_eq!(seen, vec![1, 2]);
    }
}
