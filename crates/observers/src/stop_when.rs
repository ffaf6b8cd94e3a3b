use fixpoint_core::Observer;

use crate::traits::{CanStopEarly, HasIter, HasResidual};

/// Observer that stops a solver once the residual is small enough.
///
/// Requests an early stop on the first event whose `|residual|` is below
/// `tolerance`, provided at least `min_iters` iterations have run.
/// A NaN residual never triggers a stop.
///
/// # Example
///
/// ```
/// use fixpoint_observers::StopWhen;
/// use fixpoint_solvers::{Config, Status, bisection};
///
/// let solution = bisection::solve(
///     &f64::sin,
///     [3.0, 4.0],
///     &Config::BISECTION,
///     StopWhen::new(1e-6),
/// )
/// .unwrap();
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert!(solution.residual.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopWhen {
    tolerance: f64,
    min_iters: usize,
}

impl StopWhen {
    /// Stops as soon as `|residual| < tolerance`.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_iters: 0,
        }
    }

    /// Requires at least `min_iters` iterations before stopping.
    #[must_use]
    pub fn min_iters(mut self, min_iters: usize) -> Self {
        self.min_iters = min_iters;
        self
    }

    /// Returns the residual tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl<E, A> Observer<E, A> for StopWhen
where
    E: HasIter + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iter() >= self.min_iters && event.residual().abs() < self.tolerance)
            .then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use fixpoint_solvers::{Action, Config, Status, heron, steffensen};

    #[test]
    fn stops_heron_at_loose_tolerance() {
        let solution =
            heron::solve(2.0, &Config::HERON, StopWhen::new(1e-2)).expect("should stop");

        // Relative errors are -1, -0.125, then about -3.5e-3.
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_relative_eq!(solution.root, 17.0 / 12.0);
    }

    #[test]
    fn waits_for_min_iters() {
        // Iteration 2 is already below tolerance but too early to stop.
        let observer = StopWhen::new(1.0).min_iters(3);

        let solution = heron::solve(2.0, &Config::HERON, observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
    }

    #[test]
    fn never_stops_on_nan_residual() {
        let mut observer = StopWhen::new(f64::INFINITY);
        let event = steffensen::Event {
            iter: 1,
            x: 0.0,
            residual: f64::NAN,
            slope: f64::NAN,
            next: f64::NAN,
        };

        let action: Option<Action> = observer.observe(&event);

        assert!(action.is_none());
    }

    #[test]
    fn tolerance_is_reported() {
        assert_relative_eq!(StopWhen::new(1e-9).tolerance(), 1e-9);
    }
}
