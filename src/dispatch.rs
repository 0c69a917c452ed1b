//! Thread-per-partition dispatch with an all-or-nothing join barrier.

use std::thread;

/// Spawns one OS thread per job and blocks until every thread has finished.
///
/// Each job is moved into exactly one thread. The scope joins all threads
/// before returning, so the caller never observes partial results. A worker
/// panic (or a failed spawn) propagates out of the scope and aborts the run;
/// there is no partial-degradation path.
pub fn run_parallel<T, F>(jobs: Vec<T>, task: F)
where
    T: Send,
    F: Fn(T) + Sync,
{
    thread::scope(|scope| {
        let task = &task;
        for job in jobs {
            scope.spawn(move || task(job));
        }
    });
}
