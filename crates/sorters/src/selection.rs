//! Selection sort.
//!
//! Every outer pass ends with exactly one swap and one snapshot, including
//! the pass where the minimum is already in place and the element is
//! swapped with itself.

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

    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            recorder.compared();
            if order::less(&items[j], &items[min])? {
                min = j;
            }
        }

        items.swap(i, min);
        recorder.swapped();
        recorder.record(items, &[i, min]);
    }

    Ok(())
}
