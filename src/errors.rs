//! Error taxonomy for the harness.
//!
//! The only recoverable error class is buffer allocation failure during trial
//! setup, which aborts the whole run with a diagnostic and exit code 1.
//! Host-parallelism query failure is handled by silent fallback and is not an
//! error.

use std::collections::TryReserveError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to allocate {what} ({len} elements): {source}")]
    BufferAllocation {
        what: &'static str,
        len: usize,
        source: TryReserveError,
    },
}

/// Allocates a buffer of `len` copies of `value`, reporting allocation
/// failure instead of aborting the process.
pub fn checked_vec<T: Clone>(value: T, len: usize, what: &'static str) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|source| BenchError::BufferAllocation { what, len, source })?;
    buf.resize(len, value);
    Ok(buf)
}
