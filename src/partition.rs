//! Splitting a problem domain into per-worker index ranges.
//!
//! Every pipeline in this harness uses the same scheme: `W` contiguous
//! half-open ranges over `[0, N)`, each of width `floor(N/W)`, with the last
//! range extended to absorb the remainder. Partitions are disjoint and their
//! union is exactly the domain.

/// One worker's share of the problem domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub start: usize,
    pub end: usize,
    pub worker_id: usize,
}

impl Partition {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits `[0, n)` into `workers` contiguous ranges.
///
/// The last range absorbs `n % workers`. Callers clamp the worker count to at
/// least 1 before calling. When `n < workers` the leading ranges degenerate to
/// empty spans; that is accepted, not guarded against.
pub fn partition(n: usize, workers: usize) -> Vec<Partition> {
    assert!(workers >= 1, "worker count must be at least 1");
    let chunk = n / workers;
    (0..workers)
        .map(|w| Partition {
            start: w * chunk,
            end: if w == workers - 1 { n } else { (w + 1) * chunk },
            worker_id: w,
        })
        .collect()
}

/// Carves `buf` into one disjoint mutable sub-slice per partition.
///
/// `stride` is the number of buffer elements per domain index (1 for the sort
/// array, the row width for a flat matrix). The partitions must cover the
/// buffer exactly: `buf.len() == total domain size * stride`.
pub fn split_mut<'a, T>(
    mut buf: &'a mut [T],
    partitions: &[Partition],
    stride: usize,
) -> Vec<&'a mut [T]> {
    let mut views = Vec::with_capacity(partitions.len());
    for part in partitions {
        let (head, tail) = buf.split_at_mut(part.len() * stride);
        views.push(head);
        buf = tail;
    }
    debug_assert!(buf.is_empty(), "partitions must cover the whole buffer");
    views
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(parts: &[Partition], n: usize) {
        assert_eq!(parts[0].start, 0);
        assert_eq!(parts.last().unwrap().end, n);
        for pair in parts.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for (i, part) in parts.iter().enumerate() {
            assert!(part.start <= part.end);
            assert_eq!(part.worker_id, i);
        }
    }

    #[test]
    fn covers_domain_exactly() {
        for n in [0, 1, 5, 16, 100, 999, 100_000] {
            for w in [1, 2, 3, 4, 7, 8, 64] {
                let parts = partition(n, w);
                assert_eq!(parts.len(), w);
                assert_covers(&parts, n);
            }
        }
    }

    #[test]
    fn last_worker_absorbs_remainder() {
        let parts = partition(10, 3);
        assert_eq!(parts[0], Partition { start: 0, end: 3, worker_id: 0 });
        assert_eq!(parts[1], Partition { start: 3, end: 6, worker_id: 1 });
        assert_eq!(parts[2], Partition { start: 6, end: 10, worker_id: 2 });
    }

    #[test]
    fn small_domain_degenerates_to_empty_spans() {
        let parts = partition(5, 8);
        assert_covers(&parts, 5);
        for part in &parts[..7] {
            assert!(part.is_empty());
        }
        assert_eq!(parts[7].len(), 5);
    }

    #[test]
    #[should_panic]
    fn zero_workers_rejected() {
        partition(10, 0);
    }

    #[test]
    fn split_mut_matches_partitions() {
        let mut buf: Vec<u32> = (0..12).collect();
        let parts = partition(12, 4);
        let views = split_mut(&mut buf, &parts, 1);
        assert_eq!(views.len(), 4);
        for (part, view) in parts.iter().zip(&views) {
            assert_eq!(view.len(), part.len());
            assert_eq!(view[0], part.start as u32);
        }
    }

    #[test]
    fn split_mut_with_stride() {
        let mut buf = vec![0u8; 10 * 3];
        let parts = partition(10, 4);
        let views = split_mut(&mut buf, &parts, 3);
        let total: usize = views.iter().map(|v| v.len()).sum();
        assert_eq!(total, 30);
        assert_eq!(views[3].len(), 4 * 3);
    }
}
