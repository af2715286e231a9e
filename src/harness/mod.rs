//! Generic multi-threaded benchmark harness
//!
//! One harness drives every tool in this crate: N worker threads run an
//! opaque timed operation in a tight loop and feed samples into the shared
//! [`AggregateStats`], while a reporter thread renders live progress once
//! per tick. The orchestrator joins the workers, signals the reporter to
//! stop, and returns the final snapshot.

use crate::errors::Result;
use crate::stats::{AggregateStats, StatsSnapshot, reporting};

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// A parameterized timed operation.
///
/// Implementations build one long-lived `Resource` per worker thread in
/// [`setup`](BenchOp::setup) so that setup cost never pollutes per-operation
/// timing, then perform and self-time one operation per
/// [`run_once`](BenchOp::run_once) call. A failed invocation yields `Err`
/// and contributes no sample.
pub trait BenchOp: Sync {
    type Resource;

    /// Counter noun for progress output ("Keys", "Sigs", ...)
    fn noun(&self) -> &'static str;

    /// Throughput unit for progress output ("keys/s", "sigs/s", ...)
    fn unit(&self) -> &'static str;

    /// Sanity ceiling: the longest plausible duration for one operation
    fn ceiling(&self) -> Duration;

    /// Build the per-thread resource reused across all loop iterations
    fn setup(&self) -> Result<Self::Resource>;

    /// Perform one operation and return its measured wall-clock duration
    fn run_once(&self, resource: &mut Self::Resource) -> Result<Duration>;
}

/// Immutable per-run execution parameters
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub threads: u32,
    pub loops: u64,
    pub report_interval: Duration,
}

/// Result of a completed benchmark run
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    pub snapshot: StatsSnapshot,
    pub elapsed: Duration,
}

/// Run the benchmark to completion and return the final statistics.
///
/// Spawns `cfg.threads` workers plus one reporter, joins the workers, then
/// signals the reporter to stop (observed within one tick). Scoped threads
/// guarantee the shared statistics outlive every reader.
pub fn run<O: BenchOp>(op: &O, cfg: &RunConfig) -> RunOutcome {
    let stats = AggregateStats::new(op.ceiling());
    let stop = AtomicBool::new(false);
    let run_start = Instant::now();

    thread::scope(|scope| {
        let stats = &stats;
        let stop = &stop;

        let mut workers = Vec::with_capacity(cfg.threads as usize);
        for worker_id in 0..cfg.threads {
            let loops = cfg.loops;
            workers.push(scope.spawn(move || worker_loop(worker_id, op, loops, stats)));
        }

        let interval = cfg.report_interval;
        let reporter = scope.spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                reporting::print_progress(
                    &stats.snapshot(),
                    run_start.elapsed(),
                    op.noun(),
                    op.unit(),
                );
                thread::sleep(interval);
            }
        });

        for handle in workers {
            if handle.join().is_err() {
                error!("Worker thread panicked");
            }
        }

        stop.store(true, Ordering::Relaxed);
        if reporter.join().is_err() {
            error!("Reporter thread panicked");
        }
    });

    RunOutcome {
        snapshot: stats.snapshot(),
        elapsed: run_start.elapsed(),
    }
}

/// Worker body: one resource setup, then `loops` timed invocations.
///
/// A setup failure aborts only this worker's contribution; the run continues
/// with the remaining threads. Per-invocation failures are skipped silently.
fn worker_loop<O: BenchOp>(worker_id: u32, op: &O, loops: u64, stats: &AggregateStats) {
    let mut resource = match op.setup() {
        Ok(resource) => resource,
        Err(e) => {
            error!("Worker {} setup failed: {}", worker_id, e);
            return;
        }
    };

    debug!("Worker {} starting {} iterations", worker_id, loops);
    for _ in 0..loops {
        if let Ok(elapsed) = op.run_once(&mut resource) {
            stats.accept(elapsed);
        }
    }
}
