//! Aggregate timing statistics shared across all worker threads

use std::sync::Mutex;
use std::time::Duration;

/// Running statistics guarded by a single mutex. All four numeric fields are
/// mutated only through [`AggregateStats::accept`], so no reader can ever
/// observe a partial update (count incremented but total not yet added, etc.).
#[derive(Debug, Default, Clone, Copy)]
struct StatsInner {
    count: u64,
    total: Duration,
    min: Duration,
    max: Duration,
    initialized: bool,
}

/// Thread-safe aggregate of accepted timing samples.
///
/// The ceiling is the sanity bound for one operation of the benchmarked
/// class: samples above it, or of zero length, are artifacts of thread
/// preemption or clock steps and are silently discarded so they cannot
/// corrupt min/max.
#[derive(Debug)]
pub struct AggregateStats {
    inner: Mutex<StatsInner>,
    ceiling: Duration,
}

/// A consistent copy of the aggregate state taken at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub count: u64,
    pub total: Duration,
    pub min: Duration,
    pub max: Duration,
    pub initialized: bool,
}

impl AggregateStats {
    pub fn new(ceiling: Duration) -> Self {
        Self {
            inner: Mutex::new(StatsInner::default()),
            ceiling,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StatsInner> {
        // Neither accept nor snapshot can panic while holding the guard, so
        // recover the inner state instead of propagating poison.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record one timing sample as a single indivisible update.
    ///
    /// Implausible samples (zero, or above the sanity ceiling) are dropped
    /// without touching any field; they are never clamped into range.
    pub fn accept(&self, sample: Duration) {
        if sample.is_zero() || sample > self.ceiling {
            return;
        }

        let mut inner = self.lock();
        inner.count += 1;
        inner.total += sample;

        if !inner.initialized {
            inner.min = sample;
            inner.max = sample;
            inner.initialized = true;
        } else {
            if sample < inner.min {
                inner.min = sample;
            }
            if sample > inner.max {
                inner.max = sample;
            }
        }
    }

    /// Take a torn-free copy of the aggregate state
    pub fn snapshot(&self) -> StatsSnapshot {
        let inner = self.lock();
        StatsSnapshot {
            count: inner.count,
            total: inner.total,
            min: inner.min,
            max: inner.max,
            initialized: inner.initialized,
        }
    }
}

impl StatsSnapshot {
    /// Accepted operations per second over the given wall-clock window
    pub fn throughput(&self, elapsed: Duration) -> f64 {
        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            self.count as f64 / secs
        } else {
            0.0
        }
    }

    /// Mean operation latency in milliseconds (0.0 before the first sample)
    pub fn avg_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total.as_secs_f64() * 1000.0 / self.count as f64
        }
    }

    /// Smallest accepted sample in milliseconds (0.0 before the first sample)
    pub fn min_ms(&self) -> f64 {
        if self.initialized {
            self.min.as_secs_f64() * 1000.0
        } else {
            0.0
        }
    }

    /// Largest accepted sample in milliseconds (0.0 before the first sample)
    pub fn max_ms(&self) -> f64 {
        if self.initialized {
            self.max.as_secs_f64() * 1000.0
        } else {
            0.0
        }
    }
}
