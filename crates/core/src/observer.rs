/// Callback attached to a scalar solve, called once per iteration.
///
/// Each solver hands its observer an event `E` describing the iteration it
/// just ran: the point evaluated, its residual and any method-specific state
/// such as a bisection bracket or a Steffensen slope. The observer answers
/// with `Some(action)` to steer the solver, typically `Action::StopEarly` to
/// keep the point just evaluated, or `None` to let the iteration carry on.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, so a one-off trace
/// or stopping rule needs no named type. Passing `()` opts out entirely.
pub trait Observer<E, A> {
    /// Inspects one iteration and returns the action to take, if any.
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

/// Unit never acts; solvers use it for their unobserved entry points.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _: &E) -> Option<A> {
        None
    }
}
