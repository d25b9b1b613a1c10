//! Request counters and latency tracking.
//!
//! Counters are lock-free `AtomicU64`s bumped on the request path. Latency
//! samples go into a fixed ring buffer behind a `parking_lot::Mutex`, read
//! only when someone asks for percentiles.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use parking_lot::Mutex;

// ---------------------------------------------------------------------------
// Counters
// ---------------------------------------------------------------------------

/// Atomic counters for request outcomes.
#[derive(Debug)]
pub struct PokedexCounters {
    /// Requests received.
    pub requests: AtomicU64,
    /// Reports that ended in a not-found line.
    pub not_found: AtomicU64,
    /// Requests rejected with an unknown version token.
    pub unknown_versions: AtomicU64,
    /// Requests aborted by a reference store fault.
    pub store_faults: AtomicU64,
    /// Lines handed back to callers.
    pub lines_emitted: AtomicU64,
}

impl PokedexCounters {
    /// Create a new set of zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requests: AtomicU64::new(0),
            not_found: AtomicU64::new(0),
            unknown_versions: AtomicU64::new(0),
            store_faults: AtomicU64::new(0),
            lines_emitted: AtomicU64::new(0),
        }
    }

    /// Snapshot all counters for export.
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            unknown_versions: self.unknown_versions.load(Ordering::Relaxed),
            store_faults: self.store_faults.load(Ordering::Relaxed),
            lines_emitted: self.lines_emitted.load(Ordering::Relaxed),
        }
    }
}

impl Default for PokedexCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot of counter values at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSnapshot {
    /// Requests received.
    pub requests: u64,
    /// Not-found reports.
    pub not_found: u64,
    /// Unknown version tokens.
    pub unknown_versions: u64,
    /// Store faults.
    pub store_faults: u64,
    /// Lines emitted.
    pub lines_emitted: u64,
}

impl CounterSnapshot {
    /// Format as Prometheus-compatible text.
    #[must_use]
    pub fn to_prometheus(&self) -> String {
        format!(
            "# HELP pokedex_requests_total Lookup requests received\n\
             # TYPE pokedex_requests_total counter\n\
             pokedex_requests_total {}\n\
             # HELP pokedex_not_found_total Reports ending in a not-found line\n\
             # TYPE pokedex_not_found_total counter\n\
             pokedex_not_found_total {}\n\
             # HELP pokedex_unknown_versions_total Requests with an unknown version token\n\
             # TYPE pokedex_unknown_versions_total counter\n\
             pokedex_unknown_versions_total {}\n\
             # HELP pokedex_store_faults_total Requests aborted by a reference store fault\n\
             # TYPE pokedex_store_faults_total counter\n\
             pokedex_store_faults_total {}\n\
             # HELP pokedex_lines_emitted_total Report lines returned\n\
             # TYPE pokedex_lines_emitted_total counter\n\
             pokedex_lines_emitted_total {}\n",
            self.requests,
            self.not_found,
            self.unknown_versions,
            self.store_faults,
            self.lines_emitted,
        )
    }
}

// ---------------------------------------------------------------------------
// Latency
// ---------------------------------------------------------------------------

const HISTORY_LEN: usize = 256;

/// Ring buffer of recent request latencies (milliseconds).
#[derive(Debug)]
pub struct LatencyHistogram {
    history: Mutex<History>,
}

#[derive(Debug)]
struct History {
    samples: Vec<f64>,
    write_idx: usize,
    count: u64,
}

impl LatencyHistogram {
    /// Create an empty histogram.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: Mutex::new(History {
                samples: vec![0.0; HISTORY_LEN],
                write_idx: 0,
                count: 0,
            }),
        }
    }

    /// Start timing a request. The guard records on drop.
    pub fn start(&self) -> LatencyGuard<'_> {
        LatencyGuard {
            histogram: self,
            start: Instant::now(),
        }
    }

    /// Record a sample manually (milliseconds).
    pub fn record(&self, ms: f64) {
        let mut h = self.history.lock();
        let idx = h.write_idx;
        h.samples[idx] = ms;
        h.write_idx = (idx + 1) % HISTORY_LEN;
        h.count += 1;
    }

    /// Total samples recorded since creation.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.history.lock().count
    }

    /// Median and 95th percentile over the retained samples.
    #[must_use]
    pub fn percentiles(&self) -> Option<LatencyPercentiles> {
        let h = self.history.lock();
        let n = usize::try_from(h.count).map_or(HISTORY_LEN, |c| c.min(HISTORY_LEN));
        if n == 0 {
            return None;
        }
        let mut sorted = h.samples[..n].to_vec();
        drop(h);
        sorted.sort_by(f64::total_cmp);

        let p95_idx = (n * 95 / 100).min(n - 1);
        Some(LatencyPercentiles {
            p50: sorted[n / 2],
            p95: sorted[p95_idx],
            max: sorted[n - 1],
        })
    }
}

impl Default for LatencyHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard that records elapsed time when dropped.
pub struct LatencyGuard<'a> {
    histogram: &'a LatencyHistogram,
    start: Instant,
}

impl Drop for LatencyGuard<'_> {
    fn drop(&mut self) {
        self.histogram
            .record(self.start.elapsed().as_secs_f64() * 1000.0);
    }
}

/// Percentile statistics for request latency.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyPercentiles {
    /// Median, milliseconds.
    pub p50: f64,
    /// 95th percentile, milliseconds.
    pub p95: f64,
    /// Slowest retained sample, milliseconds.
    pub max: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
