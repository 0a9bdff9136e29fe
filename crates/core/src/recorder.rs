use crate::{Snapshot, Trace};

/// Comparison and swap counts for one sort invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Number of counted comparisons.
    pub comparisons: u64,

    /// Number of counted swaps (including element placements some algorithms
    /// count as swaps).
    pub swaps: u64,
}

/// Invocation-scoped sink for snapshots and counters.
///
/// A recorder is created fresh for every sort and consumed when the sort
/// finishes, so nothing accumulates across invocations.
///
/// A recorder made with [`counting`](Self::counting) counts snapshots
/// without keeping them. Counters and the snapshot count match what a full
/// recorder would report for the same run.
///
/// Recording and counting are separate calls. Each algorithm decides when to
/// call [`record`](Self::record), [`compared`](Self::compared), and
/// [`swapped`](Self::swapped); the recorder never inspects the sequence
/// beyond copying it.
#[derive(Debug, Clone)]
pub struct Recorder<T> {
    steps: Trace<T>,
    counters: Counters,
    recorded: usize,
    keep_steps: bool,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            counters: Counters::default(),
            recorded: 0,
            keep_steps: true,
        }
    }
}

impl<T: Clone> Recorder<T> {
    /// Records a snapshot of `items` with the given focus indices.
    pub fn record(&mut self, items: &[T], focus: &[usize]) {
        self.recorded += 1;
        if self.keep_steps {
            self.steps.push(Snapshot::capture(items, focus));
        }
    }
}

impl<T> Recorder<T> {
    /// Creates an empty recorder with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that counts snapshots but discards them.
    #[must_use]
    pub fn counting() -> Self {
        Self {
            keep_steps: false,
            ..Self::default()
        }
    }

    /// Counts one comparison.
    pub fn compared(&mut self) {
        self.counters.comparisons += 1;
    }

    /// Counts one swap.
    pub fn swapped(&mut self) {
        self.counters.swaps += 1;
    }

    /// Returns the counters accumulated so far.
    #[must_use]
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Returns the snapshots recorded so far.
    ///
    /// Always empty for a [`counting`](Self::counting) recorder.
    #[must_use]
    pub fn steps(&self) -> &[Snapshot<T>] {
        &self.steps
    }

    /// Returns how many snapshots have been recorded, kept or not.
    #[must_use]
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    /// Consumes the recorder, returning the trace and final counters.
    #[must_use]
    pub fn finish(self) -> (Trace<T>, Counters) {
        (self.steps, self.counters)
    }
}
