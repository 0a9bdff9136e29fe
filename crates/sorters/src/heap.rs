//! Heap sort.
//!
//! A max-heap is built by sifting down indices `n/2 - 1` through `0`. The
//! root is then repeatedly swapped with the last element of the shrinking
//! heap and sifted back down.
//!
//! Sifting counts a comparison only for a child that beats the current
//! largest candidate. Every swap, whether extracting the root or sifting,
//! counts a swap and records a snapshot after the swap.

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
    let n = items.len();

    for root in (0..n / 2).rev() {
        sift_down(items, n, root, recorder)?;
    }

    for end in (1..n).rev() {
        items.swap(0, end);
        recorder.swapped();
        recorder.record(items, &[0, end]);
        sift_down(items, end, 0, recorder)?;
    }

    Ok(())
}

/// Restores the max-heap property for the subtree at `parent` within `items[..len]`.
fn sift_down<T>(
    items: &mut [T],
    len: usize,
    parent: usize,
    recorder: &mut Recorder<T>,
) -> Result<(), Error>
where
    T: PartialOrd + Clone,
{
    let mut largest = parent;
    let left = 2 * parent + 1;
    let right = left + 1;

    if left < len && order::greater(&items[left], &items[largest])? {
        recorder.compared();
        largest = left;
    }
    if right < len && order::greater(&items[right], &items[largest])? {
        recorder.compared();
        largest = right;
    }

    if largest != parent {
        items.swap(parent, largest);
        recorder.swapped();
        recorder.record(items, &[parent, largest]);
        sift_down(items, len, largest, recorder)?;
    }

    Ok(())
}
