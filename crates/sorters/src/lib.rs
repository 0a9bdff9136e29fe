//! Instrumented sorting algorithms.
//!
//! Every algorithm sorts a private working copy of the input and records a
//! [`Snapshot`] of the whole sequence at algorithm-defined points, along with
//! exact comparison and swap counts. Replaying the trace animates the sort.
//!
//! # Algorithms
//!
//! - [`bubble`]: adjacent exchanges, one snapshot per inner step
//! - [`selection`]: one swap and one snapshot per outer pass
//! - [`insertion`]: one snapshot per shift plus one per key placement
//! - [`merge`]: top-down merge, one snapshot per placement
//! - [`quick`]: Lomuto partition with the last element as pivot
//! - [`heap`]: bottom-up max-heap build, then repeated root extraction
//!
//! Each module exposes a `sort` function that works on a caller-provided
//! slice and [`Recorder`]. Most callers want [`sort`] or [`sort_by_name`]
//! instead, which take care of copying the input and collecting the result.
//! [`tally`] runs the same algorithms but keeps only the counts, for inputs
//! too large to trace.
//!
//! # Example
//!
//! ```
//! use stepsort_sorters::{Algorithm, sort};
//!
//! let solution = sort(&[5, 3, 8, 1], Algorithm::Bubble).unwrap();
//!
//! assert_eq!(solution.sorted, vec![1, 3, 5, 8]);
//! assert_eq!(solution.comparisons, 6);
//! assert_eq!(solution.swaps, 4);
//! ```
//!
//! [`Snapshot`]: stepsort_core::Snapshot

mod algorithm;
mod solution;


pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use algorithm::Algorithm;
pub use solution::{Solution, Tally};

use stepsort_core::{Error, Recorder};

/// Sorts a copy of `items` with the given algorithm, recording every step.
///
/// The input slice is left untouched. Counters and the trace are created
/// fresh for this call.
///
/// # Errors
///
/// Returns [`Error::Internal`] if two elements turn out to have no defined
/// ordering. No partial trace is returned.
pub fn sort<T>(items: &[T], algorithm: Algorithm) -> Result<Solution<T>, Error>
where
    T: PartialOrd + Clone,
{
    let mut working = items.to_vec();
    let mut recorder = Recorder::new();

    runner(algorithm)(&mut working, &mut recorder)?;

    let (steps, counters) = recorder.finish();
    Ok(Solution {
        algorithm,
        steps,
        comparisons: counters.comparisons,
        swaps: counters.swaps,
        sorted: working,
    })
}

/// Sorts a copy of `items` with the algorithm named by `name`.
///
/// # Errors
///
/// Returns [`Error::InvalidAlgorithm`] if `name` is not one of
/// [`Algorithm::ALL`], or any error [`sort`] can return.
pub fn sort_by_name<T>(items: &[T], name: &str) -> Result<Solution<T>, Error>
where
    T: PartialOrd + Clone,
{
    let algorithm: Algorithm = name.parse()?;
    sort(items, algorithm)
}

/// Sorts a copy of `items` counting steps, comparisons, and swaps without
/// keeping any snapshots.
///
/// The figures are identical to those of [`sort`] on the same input.
///
/// # Errors
///
/// Returns [`Error::Internal`] if two elements turn out to have no defined
/// ordering.
pub fn tally<T>(items: &[T], algorithm: Algorithm) -> Result<Tally<T>, Error>
where
    T: PartialOrd + Clone,
{
    let mut working = items.to_vec();
    let mut recorder = Recorder::counting();

    runner(algorithm)(&mut working, &mut recorder)?;

    let counters = recorder.counters();
    Ok(Tally {
        algorithm,
        steps: recorder.recorded(),
        comparisons: counters.comparisons,
        swaps: counters.swaps,
        sorted: working,
    })
}

type Runner<T> = fn(&mut [T], &mut Recorder<T>) -> Result<(), Error>;

fn runner<T>(algorithm: Algorithm) -> Runner<T>
where
    T: PartialOrd + Clone,
{
    match algorithm {
        Algorithm::Bubble => bubble::sort,
        Algorithm::Selection => selection::sort,
        Algorithm::Insertion => insertion::sort,
        Algorithm::Merge => merge::sort,
        Algorithm::Quick => quick::sort,
        Algorithm::Heap => heap::sort,
    }
}
