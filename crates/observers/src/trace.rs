use fixpoint_core::Observer;

use crate::traits::{HasIter, HasResidual, HasX};

/// One iteration as seen by a [`Trace`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Point evaluated during the iteration.
    pub x: f64,

    /// Residual at `x`, or NaN if none was available.
    pub residual: f64,
}

/// Observer that records every iteration of a solve.
///
/// A `Trace` never acts, so attaching one does not change the result.
/// Pass it by mutable reference to keep the records after the solve.
///
/// # Example
///
/// ```
/// use fixpoint_observers::Trace;
/// use fixpoint_solvers::{Config, bisection};
///
/// let mut trace = Trace::new();
/// let solution = bisection::solve(&f64::sin, [3.0, 4.0], &Config::BISECTION, &mut trace)
///     .unwrap();
///
/// assert_eq!(trace.len(), solution.iters);
/// assert_eq!(trace.records()[0].x, 3.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trace {
    records: Vec<Record>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Consumes the trace and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<E, A> Observer<E, A> for Trace
where
    E: HasIter + HasX + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.records.push(Record {
            iter: event.iter(),
            x: event.x(),
            residual: event.residual(),
        });
        None
    }
}

impl<E, A> Observer<E, A> for &mut Trace
where
    E: HasIter + HasX + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use fixpoint_solvers::{Config, Status, heron, steffensen};

    #[test]
    fn records_every_heron_iteration() {
        let mut trace = Trace::new();

        let solution = heron::solve(2.0, &Config::HERON, &mut trace).expect("should solve");

        assert_eq!(trace.len(), solution.iters);

        let first = trace.records()[0];
        assert_eq!(first.iter, 1);
        assert_relative_eq!(first.x, 2.0);
        assert_relative_eq!(first.residual, -1.0);

        let last = trace.last().expect("at least one record");
        assert_relative_eq!(last.x, solution.root);
    }

    #[test]
    fn iterations_are_numbered_in_order() {
        let mut trace = Trace::new();

        steffensen::solve(&|x: f64| 2.0 - x * x, 2.0, &Config::STEFFENSEN, &mut trace)
            .expect("should solve");

        let iters: Vec<usize> = trace.records().iter().map(|r| r.iter).collect();
        let expected: Vec<usize> = (1..=trace.len()).collect();
        assert_eq!(iters, expected);
    }

    #[test]
    fn tracing_does_not_change_the_result() {
        let f = |x: f64| x.cos() - x;

        let plain = steffensen::solve_unobserved(&f, 1.0, &Config::STEFFENSEN).expect("solves");
        let traced =
            steffensen::solve(&f, 1.0, &Config::STEFFENSEN, Trace::new()).expect("solves");

        assert_eq!(plain.status, traced.status);
        assert_eq!(plain.iters, traced.iters);
        assert_eq!(plain.x.to_bits(), traced.x.to_bits());
    }

    #[test]
    fn empty_when_no_iteration_runs() {
        let mut trace = Trace::new();
        let config = Config::new(0, 0.0).expect("valid config");

        let solution = heron::solve(2.0, &config, &mut trace).expect("should finish");

        assert_eq!(solution.status, Status::MaxIters);
        assert!(trace.is_empty());
        assert!(trace.into_records().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn records_serialize_to_json() {
        let record = Record {
            iter: 2,
            x: 1.5,
            residual: -0.125,
        };

        let json = serde_json::to_string(&record).expect("serializable");

        assert_eq!(json, r#"{"iter":2,"x":1.5,"residual":-0.125}"#);
    }
}
