//! Cross-algorithm properties checked over a fixed set of generated inputs.

use stepsort_sorters::{Algorithm, Solution, sort, tally};

/// Deterministic inputs: edge cases plus pseudo-random sequences of varied
/// length and value range (so duplicates are common).
fn inputs() -> Vec<Vec<i64>> {
    let mut inputs = vec![
        vec![],
        vec![7],
        vec![1, 2],
        vec![2, 1],
        vec![4, 4, 4, 4],
        (0..12).collect(),
        (0..12).rev().collect(),
        vec![3, -1, 3, 0, -1, 8, 3],
    ];

    // Linear congruential generator so every run sees the same data.
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    };

    for len in [3, 5, 8, 13, 21, 34] {
        for range in [3, 50] {
            let values = (0..len).map(|_| (next() % range) as i64 - 10).collect();
            inputs.push(values);
        }
    }

    inputs
}

fn sorted_copy(items: &[i64]) -> Vec<i64> {
    let mut sorted = items.to_vec();
    sorted.sort_unstable();
    sorted
}

fn inversions(items: &[i64]) -> u64 {
    let mut count = 0;
    for i in 0..items.len() {
        for j in i + 1..items.len() {
            if items[i] > items[j] {
                count += 1;
            }
        }
    }
    count
}

fn run(items: &[i64], algorithm: Algorithm) -> Solution<i64> {
    sort(items, algorithm).expect("integers are totally ordered")
}

#[test]
fn last_step_is_sorted_input() {
    for items in inputs() {
        let expected = sorted_copy(&items);
        for algorithm in Algorithm::ALL {
            let solution = run(&items, algorithm);

            assert_eq!(solution.sorted, expected, "{algorithm} on {items:?}");
            if let Some(last) = solution.last_step() {
                assert_eq!(last, expected.as_slice(), "{algorithm} on {items:?}");
            }
        }
    }
}

#[test]
fn trace_is_non_empty_from_two_elements() {
    for items in inputs().into_iter().filter(|items| items.len() >= 2) {
        for algorithm in Algorithm::ALL {
            let solution = run(&items, algorithm);
            assert!(!solution.steps.is_empty(), "{algorithm} on {items:?}");
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    for items in inputs() {
        for algorithm in Algorithm::ALL {
            assert_eq!(run(&items, algorithm), run(&items, algorithm));
        }
    }
}

#[test]
fn every_snapshot_has_full_length() {
    for items in inputs() {
        for algorithm in Algorithm::ALL {
            let solution = run(&items, algorithm);
            for snapshot in &solution.steps {
                assert_eq!(snapshot.items().len(), items.len());
                assert!(snapshot.focus().iter().all(|&index| index < items.len()));
            }
        }
    }
}

#[test]
fn exchange_sorts_only_permute() {
    // Algorithms that only ever swap keep every snapshot a permutation of
    // the input. Insertion and merge sorts write copies and may not.
    let exchanges = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    for items in inputs() {
        let expected = sorted_copy(&items);
        for algorithm in exchanges {
            let solution = run(&items, algorithm);
            for snapshot in &solution.steps {
                assert_eq!(sorted_copy(snapshot.items()), expected, "{algorithm}");
            }
        }
    }
}

#[test]
fn bubble_counts_match_closed_forms() {
    for items in inputs() {
        let n = items.len() as u64;
        let solution = run(&items, Algorithm::Bubble);

        assert_eq!(solution.comparisons, n * n.saturating_sub(1) / 2);
        assert_eq!(solution.swaps, inversions(&items));
        assert_eq!(solution.steps.len() as u64, solution.comparisons);
    }
}

#[test]
fn selection_counts_match_closed_forms() {
    for items in inputs() {
        let n = items.len() as u64;
        let solution = run(&items, Algorithm::Selection);

        assert_eq!(solution.comparisons, n * n.saturating_sub(1) / 2);
        assert_eq!(solution.swaps, n);
        assert_eq!(solution.steps.len() as u64, n);
    }
}

#[test]
fn insertion_counts_match_closed_forms() {
    for items in inputs() {
        let n = items.len() as u64;
        let solution = run(&items, Algorithm::Insertion);

        assert_eq!(solution.comparisons, inversions(&items));
        assert_eq!(solution.swaps, n.saturating_sub(1));
        assert_eq!(
            solution.steps.len() as u64,
            solution.comparisons + solution.swaps
        );
    }
}

#[test]
fn merge_places_every_element_once_per_level() {
    for items in inputs() {
        let solution = run(&items, Algorithm::Merge);

        // Each counted comparison places exactly one element.
        assert_eq!(solution.comparisons, solution.swaps);
        assert!(solution.steps.len() as u64 >= solution.swaps);
    }
}

#[test]
fn quick_and_heap_snapshot_every_swap() {
    for items in inputs() {
        for algorithm in [Algorithm::Quick, Algorithm::Heap] {
            let solution = run(&items, algorithm);
            assert_eq!(solution.steps.len() as u64, solution.swaps, "{algorithm}");
        }
    }
}

#[test]
fn counters_reset_between_invocations() {
    let first = run(&[9, 8, 7, 6], Algorithm::Insertion);
    let second = run(&[1, 2], Algorithm::Insertion);

    assert_eq!(first.comparisons, 6);
    assert_eq!(second.comparisons, 0);
    assert_eq!(second.swaps, 1);
    assert_eq!(second.steps.len(), 1);
}

#[test]
fn tally_agrees_with_trace() {
    for items in inputs() {
        for algorithm in Algorithm::ALL {
            let solution = run(&items, algorithm);
            let counted = tally(&items, algorithm).expect("integers are totally ordered");

            assert_eq!(counted.steps, solution.steps.len(), "{algorithm} on {items:?}");
            assert_eq!(counted.comparisons, solution.comparisons, "{algorithm} on {items:?}");
            assert_eq!(counted.swaps, solution.swaps, "{algorithm} on {items:?}");
        }
    }
}
