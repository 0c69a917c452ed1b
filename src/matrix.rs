//! Dense matrix multiplication partitioned by output rows.
//!
//! Matrices are flat row-major `i32` buffers of `n * n` elements. Each worker
//! owns a disjoint range of output rows, so the parallel phase needs no
//! locking: input reads are shared and immutable, output writes go through
//! per-worker exclusive slices.

use crate::dispatch::run_parallel;
use crate::partition::{Partition, partition, split_mut};

/// Computes `out = a * b` for `n x n` row-major matrices, splitting the output
/// rows across `workers` threads.
pub fn multiply(a: &[i32], b: &[i32], out: &mut [i32], n: usize, workers: usize) {
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(b.len(), n * n);
    debug_assert_eq!(out.len(), n * n);

    let parts = partition(n, workers.max(1));
    let row_views = split_mut(&mut *out, &parts, n);
    let jobs: Vec<(Partition, &mut [i32])> = parts.into_iter().zip(row_views).collect();

    run_parallel(jobs, |(part, rows)| multiply_rows(a, b, rows, &part, n));
}

/// One worker's share: the output rows in `part`, written into `rows` (the
/// worker's exclusive view starting at row `part.start`).
fn multiply_rows(a: &[i32], b: &[i32], rows: &mut [i32], part: &Partition, n: usize) {
    for (offset, row_out) in rows.chunks_mut(n).enumerate() {
        let i = part.start + offset;
        let lhs = &a[i * n..(i + 1) * n];
        for (j, cell) in row_out.iter_mut().enumerate() {
            // 32-bit wraparound accumulation.
            let mut acc = 0i32;
            for k in 0..n {
                acc = acc.wrapping_add(lhs[k].wrapping_mul(b[k * n + j]));
            }
            *cell = acc;
        }
    }
}
