mod dispatch;
mod errors;
mod matrix;
mod merge_sort;
mod partition;
mod sieve;
mod trial;

use std::sync::atomic::AtomicBool;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::info;

use errors::checked_vec;
use trial::run_trials;

const MATRIX_SIZE: usize = 10000;
const SORT_SIZE: usize = 100000;
const SIEVE_LIMIT: usize = 1000000;
const NUM_ITERATIONS: usize = 30;

// Warm-up counts differ per variant; kept as observed in the reference
// programs rather than unified.
const MATRIX_WARMUP: usize = 1;
const SORT_WARMUP: usize = 2;
const SIEVE_WARMUP: usize = 3;

const SORT_FALLBACK_WORKERS: usize = 4;

/// Available parallel-processing units, or `fallback` if the query fails.
fn worker_count(fallback: usize) -> usize {
    thread::available_parallelism().map_or(fallback, |n| n.get())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cores = worker_count(1);
    info!("number of CPU cores: {cores}");

    bench_matrix_multiply(cores)?;
    bench_merge_sort(worker_count(SORT_FALLBACK_WORKERS))?;
    bench_sieve(cores)?;
    Ok(())
}

struct MatrixState {
    a: Vec<i32>,
    b: Vec<i32>,
    out: Vec<i32>,
    rng: fastrand::Rng,
    workers: usize,
}

fn bench_matrix_multiply(workers: usize) -> Result<()> {
    info!("matrix multiplication: {MATRIX_SIZE}x{MATRIX_SIZE}, {workers} worker(s)");
    let mut state = MatrixState {
        a: checked_vec(0, MATRIX_SIZE * MATRIX_SIZE, "left input matrix")?,
        b: checked_vec(0, MATRIX_SIZE * MATRIX_SIZE, "right input matrix")?,
        out: checked_vec(0, MATRIX_SIZE * MATRIX_SIZE, "output matrix")?,
        // Fixed seed: this variant never reseeds across runs.
        rng: fastrand::Rng::with_seed(0),
        workers,
    };

    println!("matrix multiplication ({MATRIX_SIZE}x{MATRIX_SIZE})");
    let report = run_trials(
        MATRIX_WARMUP,
        NUM_ITERATIONS,
        &mut state,
        |s| {
            for v in &mut s.a {
                *v = s.rng.i32(0..100);
            }
            for v in &mut s.b {
                *v = s.rng.i32(0..100);
            }
        },
        |s| matrix::multiply(&s.a, &s.b, &mut s.out, MATRIX_SIZE, s.workers),
    );
    println!("Average time per iteration: {:.6} seconds", report.mean_seconds());
    Ok(())
}

struct SortState {
    data: Vec<i32>,
    rng: fastrand::Rng,
    workers: usize,
}

fn bench_merge_sort(workers: usize) -> Result<()> {
    info!("merge sort: {SORT_SIZE} elements, {workers} worker(s)");
    // This variant reseeds from the wall clock each run; the others do not.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    let mut state = SortState {
        data: checked_vec(0, SORT_SIZE, "sort array")?,
        rng: fastrand::Rng::with_seed(seed),
        workers,
    };

    println!("merge sort ({SORT_SIZE} elements)");
    let report = run_trials(
        SORT_WARMUP,
        NUM_ITERATIONS,
        &mut state,
        |s| {
            for v in &mut s.data {
                *v = s.rng.i32(0..1000);
            }
        },
        |s| merge_sort::parallel_sort(&mut s.data, s.workers),
    );
    println!("Average time per iteration: {:.6} seconds", report.mean_seconds());
    Ok(())
}

struct SieveState {
    flags: Vec<AtomicBool>,
    workers: usize,
}

fn bench_sieve(workers: usize) -> Result<()> {
    info!("sieve of Eratosthenes: limit {SIEVE_LIMIT}, {workers} worker(s)");
    let mut state = SieveState { flags: sieve::flag_buffer(SIEVE_LIMIT)?, workers };

    println!("sieve of Eratosthenes (limit {SIEVE_LIMIT})");
    let report = run_trials(
        SIEVE_WARMUP,
        NUM_ITERATIONS,
        &mut state,
        |s| sieve::reset_flags(&s.flags),
        |s| sieve::mark_composites(&s.flags, s.workers),
    );
    println!("Average time per iteration: {:.6} seconds", report.mean_seconds());
    Ok(())
}
