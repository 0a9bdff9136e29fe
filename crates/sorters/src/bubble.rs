//! Bubble sort.
//!
//! Pass `i` walks `j` over `0..n-i-1`, counting one comparison per step and
//! swapping out-of-order neighbors. A snapshot is recorded after every inner
//! step whether or not a swap happened, so the trace always holds
//! `n(n-1)/2` snapshots.

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
        for j in 0..n - i - 1 {
            recorder.compared();
            if order::greater(&items[j], &items[j + 1])? {
                items.swap(j, j + 1);
                recorder.swapped();
            }
            recorder.record(items, &[j, j + 1]);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(items: &[i32]) -> (Vec<i32>, Recorder<i32>) {
        let mut working = items.to_vec();
        let mut recorder = Recorder::new();
        sort(&mut working, &mut recorder).expect("integers are totally ordered");
        (working, recorder)
    }

    #[test]
    fn sorts_and_counts() {
        let (sorted, recorder) = run(&[5, 3, 8, 1]);

        assert_eq!(sorted, vec![1, 3, 5, 8]);
        assert_eq!(recorder.counters().comparisons, 6);
        assert_eq!(recorder.counters().swaps, 4);
        assert_eq!(recorder.steps().len(), 6);
    }

    #[test]
    fn records_every_inner_step() {
        let (_, recorder) = run(&[5, 3, 8, 1]);

        let steps: Vec<&[i32]> = recorder.steps().iter().map(|s| s.items()).collect();
        assert_eq!(
            steps,
            vec![
                &[3, 5, 8, 1][..],
                &[3, 5, 8, 1],
                &[3, 5, 1, 8],
                &[3, 5, 1, 8],
                &[3, 1, 5, 8],
                &[1, 3, 5, 8],
            ]
        );
        assert_eq!(recorder.steps()[2].focus(), &[2, 3]);
    }

    #[test]
    fn presorted_input_never_swaps() {
        let (_, recorder) = run(&[1, 2, 3, 4]);

        assert_eq!(recorder.counters().swaps, 0);
        assert_eq!(recorder.counters().comparisons, 6);
        assert_eq!(recorder.steps().len(), 6);
    }

    #[test]
    fn single_element_records_nothing() {
        let (sorted, recorder) = run(&[5]);

        assert_eq!(sorted, vec![5]);
        assert!(recorder.steps().is_empty());
        assert_eq!(recorder.counters().comparisons, 0);
    }
}
