use stepsort_core::Trace;

use crate::Algorithm;

/// The result of an instrumented sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<T> {
    /// The algorithm that produced this solution.
    pub algorithm: Algorithm,

    /// Snapshots of the working sequence, in recording order.
    pub steps: Trace<T>,

    /// Number of counted comparisons.
    pub comparisons: u64,

    /// Number of counted swaps.
    pub swaps: u64,

    /// The sorted sequence.
    ///
    /// Equal to the last step when any steps were recorded.
    pub sorted: Vec<T>,
}

impl<T> Solution<T> {
    /// Returns the sequence held by the last recorded step, if any.
    #[must_use]
    pub fn last_step(&self) -> Option<&[T]> {
        self.steps.last().map(|snapshot| snapshot.items())
    }
}

/// Counters of an uninstrumented run: the same figures as a [`Solution`]
/// without the snapshots themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<T> {
    /// The algorithm that was run.
    pub algorithm: Algorithm,

    /// Number of snapshots the run would have recorded.
    pub steps: usize,

    /// Number of counted comparisons.
    pub comparisons: u64,

    /// Number of counted swaps.
    pub swaps: u64,

    /// The sorted sequence.
    pub sorted: Vec<T>,
}
