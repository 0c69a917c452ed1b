//! Sieve of Eratosthenes over a shared flag array.
//!
//! Unlike the other two pipelines, the workers here mutate the same buffer
//! across overlapping index spans: marking multiples of a small prime touches
//! indices throughout the whole domain. Each flag is an `AtomicBool` so every
//! individual write is its own exclusive operation. The `flags[p]` gate read
//! is a Relaxed load with no further synchronization: a stale `true` only
//! causes redundant marking, because flags transition from true to false
//! exactly once and marking is idempotent. Do not replace this with heavier
//! locking; the monotonicity is the whole point.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::dispatch::run_parallel;
use crate::errors::{BenchError, Result};
use crate::partition::partition;

/// Allocates the flag array for candidates `0..=limit`, all initially prime.
pub fn flag_buffer(limit: usize) -> Result<Vec<AtomicBool>> {
    let len = limit + 1;
    let mut flags = Vec::new();
    flags
        .try_reserve_exact(len)
        .map_err(|source| BenchError::BufferAllocation { what: "sieve flag array", len, source })?;
    flags.extend((0..len).map(|_| AtomicBool::new(true)));
    Ok(flags)
}

/// Resets every flag to prime. Runs before each trial, outside the timed
/// window.
pub fn reset_flags(flags: &[AtomicBool]) {
    for flag in flags {
        flag.store(true, Ordering::Relaxed);
    }
}

/// Marks all composites in `flags` using `workers` threads, each responsible
/// for one span of the candidate domain `[2, limit]`.
pub fn mark_composites(flags: &[AtomicBool], workers: usize) {
    let limit = flags.len().saturating_sub(1);
    if limit < 2 {
        return;
    }
    let parts = partition(limit - 1, workers.max(1));
    run_parallel(parts, |part| {
        sieve_span(flags, 2 + part.start, 2 + part.end);
    });
}

/// Marks multiples of every prime candidate within `[lo, hi)`.
///
/// For each `p` with `p * p < hi`, if `p` still reads prime, every multiple of
/// `p` in `[max(p * p, lo), hi)` is marked composite.
fn sieve_span(flags: &[AtomicBool], lo: usize, hi: usize) {
    let mut p = 2;
    while p * p < hi {
        if flags[p].load(Ordering::Relaxed) {
            let first = if p * p >= lo { p * p } else { lo.div_ceil(p) * p };
            let mut m = first;
            while m < hi {
                flags[m].store(false, Ordering::Relaxed);
                m += p;
            }
        }
        p += 1;
    }
}

/// Collects the candidates still marked prime.
pub fn collect_primes(flags: &[AtomicBool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .skip(2)
        .filter(|(_, flag)| flag.load(Ordering::Relaxed))
        .map(|(i, _)| i)
        .collect()
}
