//! Insertion sort.
//!
//! Larger elements are shifted right one position at a time, each shift
//! counting one comparison and recording a snapshot. While a shift is in
//! progress the snapshot shows the shifted element twice; the held key only
//! reappears when it is placed. Placement always counts as a swap and
//! records a snapshot, even when the key does not move.
//!
//! The comparison that ends the shifting loop is evaluated but not counted.

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
    for i in 1..items.len() {
        let key = items[i].clone();

        // `hole` is the slot the key would land in if shifting stopped now.
        let mut hole = i;
        while hole > 0 && order::greater(&items[hole - 1], &key)? {
            items[hole] = items[hole - 1].clone();
            recorder.compared();
            recorder.record(items, &[hole - 1, hole]);
            hole -= 1;
        }

        items[hole] = key;
        recorder.swapped();
        recorder.record(items, &[hole]);
    }

    Ok(())
}
