//! Quick sort with Lomuto partitioning.
//!
//! The last element of each range is the pivot. Every scan step counts one
//! comparison; elements `<=` the pivot are swapped into the lower region,
//! counting a swap and recording a snapshot even when an element is swapped
//! with itself. The closing pivot swap is always counted and recorded.

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
    match items.len() {
        0 => Ok(()),
        len => sort_range(items, 0, len - 1, recorder),
    }
}

/// Sorts the inclusive range `low..=high`.
fn sort_range<T>(
    items: &mut [T],
    low: usize,
    high: usize,
    recorder: &mut Recorder<T>,
) -> Result<(), Error>
where
    T: PartialOrd + Clone,
{
    if low < high {
        let pivot = partition(items, low, high, recorder)?;
        if pivot > low {
            sort_range(items, low, pivot - 1, recorder)?;
        }
        sort_range(items, pivot + 1, high, recorder)?;
    }
    Ok(())
}

/// Partitions `low..=high` around `items[high]` and returns the pivot's final index.
fn partition<T>(
    items: &mut [T],
    low: usize,
    high: usize,
    recorder: &mut Recorder<T>,
) -> Result<usize, Error>
where
    T: PartialOrd + Clone,
{
    // Everything before `boundary` is <= the pivot.
    let mut boundary = low;

    for j in low..high {
        recorder.compared();
        if order::less_or_equal(&items[j], &items[high])? {
            items.swap(boundary, j);
            recorder.swapped();
            recorder.record(items, &[boundary, j]);
            boundary += 1;
        }
    }

    items.swap(boundary, high);
    recorder.swapped();
    recorder.record(items, &[boundary, high]);

    Ok(boundary)
}
