//! # Progress: Atomic Batch Counters
//!
//! Thread-safe hop and seed counters shared between prime-rain workers and the
//! background status reporter. Workers bump the counters once per finished
//! seed with `fetch_add`, so concurrent completions never lose an update and
//! no lock is held across seeds.
//!
//! `BatchStats` is the frozen view taken after the join barrier; it is what
//! the report is rendered from.
//!
//! ## Background Reporter
//!
//! A dedicated thread logs progress every `interval`: seeds done, total hops,
//! and seeds/sec. It polls the `shutdown` flag in short ticks so `stop` plus
//! `join` returns promptly even with a long interval.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

const SHUTDOWN_POLL: Duration = Duration::from_millis(50);

/// Totals for a finished batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub total_hops: u64,
    pub seed_count: u64,
}

impl BatchStats {
    /// Mean hops per seed; 0.0 for an empty batch.
    pub fn average_hops(&self) -> f64 {
        if self.seed_count == 0 {
            return 0.0;
        }
        self.total_hops as f64 / self.seed_count as f64
    }
}

pub struct Progress {
    pub total_hops: AtomicU64,
    pub seeds_done: AtomicU64,
    seeds_total: u64,
    start: Instant,
    shutdown: AtomicBool,
}

impl Progress {
    pub fn new(seeds_total: u64) -> Arc<Self> {
        Arc::new(Progress {
            total_hops: AtomicU64::new(0),
            seeds_done: AtomicU64::new(0),
            seeds_total,
            start: Instant::now(),
            shutdown: AtomicBool::new(false),
        })
    }

    /// Count one finished seed and its hops.
    pub fn record_seed(&self, hops: u64) {
        self.total_hops.fetch_add(hops, Ordering::Relaxed);
        self.seeds_done.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> BatchStats {
        BatchStats {
            total_hops: self.total_hops.load(Ordering::Relaxed),
            seed_count: self.seeds_done.load(Ordering::Relaxed),
        }
    }

    pub fn start_reporter(self: &Arc<Self>, interval: Duration) -> thread::JoinHandle<()> {
        let progress = Arc::clone(self);
        thread::spawn(move || {
            let mut last = Instant::now();
            while !progress.shutdown.load(Ordering::Relaxed) {
                thread::sleep(SHUTDOWN_POLL.min(interval));
                if last.elapsed() >= interval && !progress.shutdown.load(Ordering::Relaxed) {
                    progress.print_status();
                    last = Instant::now();
                }
            }
        })
    }

    pub fn print_status(&self) {
        let elapsed = self.start.elapsed();
        let stats = self.snapshot();
        let rate = if elapsed.as_secs() > 0 {
            stats.seed_count as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        let h = elapsed.as_secs() / 3600;
        let m = (elapsed.as_secs() % 3600) / 60;
        let s = elapsed.as_secs() % 60;
        info!(
            seeds = stats.seed_count,
            of = self.seeds_total,
            hops = stats.total_hops,
            rate = %format!("{:.2}", rate),
            elapsed = %format!("{:02}:{:02}:{:02}", h, m, s),
            "rain progress"
        );
    }

    pub fn stop(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}
