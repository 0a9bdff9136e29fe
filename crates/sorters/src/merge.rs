//! Top-down merge sort.
//!
//! Ranges are half-open and split at `(start + end) / 2`. During a merge,
//! each comparison of the two run heads counts one comparison and the
//! resulting placement counts one swap. Draining whichever run remains
//! counts nothing. Every placement, drained or not, records a snapshot.
//!
//! Ties take the left head (`left <= right`), so the sort is stable and a
//! tie places the left run's element first in the trace. A strict `<` would
//! take the right head instead and record different snapshots whenever the
//! input holds duplicates.

use stepsort_core::{Error, Recorder, order};

/// Sorts `items` in place, recording into `recorder`.
///
/// # Errors
///
/// Returns [`Error::Internal`] if two elements cannot be compared.
pub fn sort<T>(items: &mut [T], recorder: &mut Recorder<T>) -> Result<(), Error>
where
    T: PartialOrd + Clone,
{
    let len = items.len();
    sort_range(items, 0, len, recorder)
}

fn sort_range<T>(
    items: &mut [T],
    start: usize,
    end: usize,
    recorder: &mut Recorder<T>,
) -> Result<(), Error>
where
    T: PartialOrd + Clone,
{
    if end - start > 1 {
        let mid = (start + end) / 2;
        sort_range(items, start, mid, recorder)?;
        sort_range(items, mid, end, recorder)?;
        merge(items, start, mid, end, recorder)?;
    }
    Ok(())
}

/// Merges the sorted runs `start..mid` and `mid..end`.
fn merge<T>(
    items: &mut [T],
    start: usize,
    mid: usize,
    end: usize,
    recorder: &mut Recorder<T>,
) -> Result<(), Error>
where
    T: PartialOrd + Clone,
{
    let left = items[start..mid].to_vec();
    let right = items[mid..end].to_vec();

    let (mut i, mut j, mut k) = (0, 0, start);

    while i < left.len() && j < right.len() {
        recorder.compared();
        if order::less_or_equal(&left[i], &right[j])? {
            items[k] = left[i].clone();
            i += 1;
        } else {
            items[k] = right[j].clone();
            j += 1;
        }
        recorder.swapped();
        recorder.record(items, &[k]);
        k += 1;
    }

    for value in left[i..].iter().chain(&right[j..]) {
        items[k] = value.clone();
        recorder.record(items, &[k]);
        k += 1;
    }

    Ok(())
}
