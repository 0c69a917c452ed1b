//! Warm-up and measured trial loops around one benchmark pipeline.

use std::time::{Duration, Instant};

use log::info;

/// Elapsed-time samples from the measured phase of a run.
pub struct TrialReport {
    pub samples: Vec<Duration>,
}

impl TrialReport {
    /// Arithmetic mean of the samples, in fractional seconds.
    pub fn mean_seconds(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let total: f64 = self.samples.iter().map(Duration::as_secs_f64).sum();
        total / self.samples.len() as f64
    }
}

/// Runs `warmup` untimed iterations followed by `trials` measured ones.
///
/// Every iteration, warm-up included, re-initializes the problem buffers via
/// `init` before running `work`. Only `work` falls inside the timed window;
/// the monotonic clock starts after `init` returns and stops at the barrier
/// `work` ends with. Warm-up timings are discarded so thread-creation and
/// paging costs do not skew the measured phase.
pub fn run_trials<S>(
    warmup: usize,
    trials: usize,
    state: &mut S,
    mut init: impl FnMut(&mut S),
    mut work: impl FnMut(&mut S),
) -> TrialReport {
    info!("warm-up: {warmup} untimed iteration(s)");
    for _ in 0..warmup {
        init(state);
        work(state);
    }

    let mut samples = Vec::with_capacity(trials);
    for iteration in 1..=trials {
        init(state);
        let start = Instant::now();
        work(state);
        let elapsed = start.elapsed();
        println!("Time for iteration {}: {:.6} seconds", iteration, elapsed.as_secs_f64());
        samples.push(elapsed);
    }
    TrialReport { samples }
}
