//! Parallel chunk sort followed by sequential bottom-up merge passes.
//!
//! Phase 1 splits the array into per-worker chunks and sorts each chunk on its
//! own thread (disjoint sub-slices, no locking). Phase 2 merges adjacent
//! sorted runs of doubling width back into place. Passes depend on each other
//! and run sequentially; the per-pair merges within a pass are independent but
//! run sequentially here as well.

use crate::dispatch::run_parallel;
use crate::partition::{partition, split_mut};

/// Sorts `data` in place using `workers` threads for the chunk-sort phase.
pub fn parallel_sort(data: &mut [i32], workers: usize) {
    let workers = workers.max(1);
    let parts = partition(data.len(), workers);
    // Width of the aligned sorted runs the merge phase starts from. The last
    // partition may span several such runs; each is still sorted after the
    // chunk sort, which is all the merge phase relies on.
    let chunk = (data.len() / workers).max(1);

    let jobs = split_mut(&mut *data, &parts, 1);
    run_parallel(jobs, |piece: &mut [i32]| piece.sort_unstable());

    merge_passes(data, chunk);
}

/// Bottom-up merge of adjacent sorted runs, doubling the run width each pass
/// until a single run covers the array. The final right-hand run of a pass may
/// be shorter when the length is not a multiple of the width.
pub fn merge_passes(data: &mut [i32], initial_width: usize) {
    let n = data.len();
    debug_assert!(initial_width >= 1 || n == 0);
    let mut width = initial_width.max(1);
    while width < n {
        let mut start = 0;
        while start + width < n {
            let mid = start + width;
            let end = (start + 2 * width).min(n);
            merge_adjacent(data, start, mid, end);
            start += 2 * width;
        }
        width *= 2;
    }
}

/// Two-pointer merge of the sorted runs `[start, mid)` and `[mid, end)` back
/// into `data[start..end]`, via temporaries sized to the two runs.
fn merge_adjacent(data: &mut [i32], start: usize, mid: usize, end: usize) {
    let left = data[start..mid].to_vec();
    let right = data[mid..end].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in &mut data[start..end] {
        *slot = if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_permutation(original: &[i32], sorted: &[i32]) {
        let mut reference = original.to_vec();
        reference.sort_unstable();
        assert_eq!(sorted, reference);
    }

    #[test]
    fn reversed_sixteen_with_four_workers() {
        let mut data: Vec<i32> = (0..16).rev().collect();
        parallel_sort(&mut data, 4);
        assert_eq!(data, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn random_data_across_worker_counts() {
        let mut rng = fastrand::Rng::with_seed(3);
        for len in [0, 1, 2, 15, 16, 100, 1000, 4099] {
            for workers in [1, 2, 4, 8, 13] {
                let original: Vec<i32> = (0..len).map(|_| rng.i32(0..1000)).collect();
                let mut data = original.clone();
                parallel_sort(&mut data, workers);
                assert_sorted_permutation(&original, &data);
            }
        }
    }

    #[test]
    fn length_not_divisible_by_workers() {
        let original: Vec<i32> = vec![9, 1, 8, 2, 7, 3, 6, 4, 5, 0, 11, 10, 13];
        let mut data = original.clone();
        parallel_sort(&mut data, 4);
        assert_sorted_permutation(&original, &data);
    }

    #[test]
    fn more_workers_than_elements() {
        let mut data = vec![3, 1, 2];
        parallel_sort(&mut data, 8);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn merging_equal_valued_runs_keeps_order() {
        let mut data = vec![5, 5, 5, 5, 5, 5, 5, 5];
        merge_passes(&mut data, 2);
        assert_eq!(data, vec![5; 8]);

        let mut data = vec![1, 3, 3, 7, 1, 3, 3, 7];
        merge_passes(&mut data, 4);
        assert_eq!(data, vec![1, 1, 3, 3, 3, 3, 7, 7]);
    }

    #[test]
    fn merge_passes_with_short_final_run() {
        let mut data = vec![2, 4, 6, 1, 3, 5, 0];
        // Runs: [2,4,6], [1,3,5], [0].
        merge_passes(&mut data, 3);
        assert_eq!(data, vec![0, 1, 2, 3, 4, 5, 6]);
    }
}
