//! # Pool: Parallel Prime Rain over Many Seeds
//!
//! Splits a batch of `total_seeds` walks into contiguous index slices, one per
//! worker, and runs the slices on a dedicated Rayon pool sized to the worker
//! count. Each worker:
//!
//! 1. seeds its own `StdRng` from the batch base seed and its slice start,
//! 2. walks its seeds in increasing index order, writing the seed header,
//!    every hop and the footer through the shared `SearchLog`,
//! 3. records each finished seed in its own result slot and in the atomic
//!    `Progress` counters.
//!
//! `run` returns after every slice has finished (the Rayon join), with
//! results ordered by seed index regardless of completion order.
//!
//! ## Partitioning
//!
//! Slices are `ceil(total / workers)` long; the last non-empty slice takes
//! whatever remains, and trailing slices are empty when there are more
//! workers than seeds.
//!
//! ## Result Slots
//!
//! One `OnceLock` per seed index. Workers never touch each other's slots, so
//! completing a seed never waits on another worker; a slot written twice or
//! left empty after the join is reported as an error rather than silently
//! papered over.

use anyhow::{anyhow, bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use std::ops::Range;
use std::sync::{Arc, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

use crate::error::RainError;
use crate::progress::{BatchStats, Progress};
use crate::range::Seed;
use crate::search_log::{LogRecord, SearchLog};
use crate::walker::{self, SeedResult, StepPolicy};

/// Multiplier used to spread per-worker seeds (2^64 / golden ratio).
const SEED_SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

/// Parameters of one prime-rain batch, as recorded in the log banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RainConfig {
    pub seeds: usize,
    pub workers: usize,
    pub step: StepPolicy,
    pub rng_seed: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub results: Vec<SeedResult>,
    pub stats: BatchStats,
}

/// Contiguous index slices covering `0..total`, one per worker.
pub fn partition(total: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = total.div_ceil(workers);
    (0..workers)
        .map(|w| {
            let start = (w * chunk).min(total);
            let end = (start + chunk).min(total);
            start..end
        })
        .collect()
}

/// Per-worker generator seed derived from the batch seed and slice start.
pub fn worker_seed(base: u64, slice_start: usize) -> u64 {
    base ^ (slice_start as u64).wrapping_add(1).wrapping_mul(SEED_SPREAD)
}

/// Time-based batch seed for runs without an explicit `--rng-seed`.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

pub struct WorkerPool<'a, W: Write + Send> {
    log: &'a SearchLog<W>,
    policy: StepPolicy,
    base_seed: u64,
    progress: Option<Arc<Progress>>,
}

impl<'a, W: Write + Send> WorkerPool<'a, W> {
    pub fn new(log: &'a SearchLog<W>, policy: StepPolicy, base_seed: u64) -> Self {
        WorkerPool {
            log,
            policy,
            base_seed,
            progress: None,
        }
    }

    /// Share live counters with a reporter. Without this, `run` keeps its own.
    pub fn with_progress(mut self, progress: Arc<Progress>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Walk `total_seeds` random seeds on `worker_count` workers. The count is
    /// clamped to `[1, total_seeds]` so no thread is spawned for an empty
    /// slice. Zero seeds is rejected as invalid input.
    pub fn run(&self, total_seeds: usize, worker_count: usize) -> Result<BatchOutcome> {
        if total_seeds == 0 {
            return Err(RainError::invalid("seed count must be positive").into());
        }
        let workers = worker_count.clamp(1, total_seeds);
        let progress = self
            .progress
            .clone()
            .unwrap_or_else(|| Progress::new(total_seeds as u64));

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("rain-worker-{}", i))
            .build()?;

        let slots: Vec<OnceLock<SeedResult>> = (0..total_seeds).map(|_| OnceLock::new()).collect();
        let slices = partition(total_seeds, workers);

        info!(
            seeds = total_seeds,
            workers,
            step = %self.policy,
            "prime rain starting"
        );

        pool.install(|| {
            slices
                .into_par_iter()
                .with_max_len(1)
                .enumerate()
                .filter(|(_, slice)| !slice.is_empty())
                .try_for_each(|(worker, slice)| self.run_slice(worker, slice, &slots, &progress))
        })?;

        let results = slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.into_inner()
                    .ok_or_else(|| anyhow!("seed index {} finished without a result", i))
            })
            .collect::<Result<Vec<_>>>()?;

        let stats = progress.snapshot();
        info!(
            seeds = stats.seed_count,
            hops = stats.total_hops,
            average = %format!("{:.2}", stats.average_hops()),
            "prime rain complete"
        );
        Ok(BatchOutcome { results, stats })
    }

    fn run_slice(
        &self,
        worker: usize,
        slice: Range<usize>,
        slots: &[OnceLock<SeedResult>],
        progress: &Progress,
    ) -> Result<()> {
        debug!(worker, start = slice.start, end = slice.end, "worker slice assigned");
        let mut rng = StdRng::seed_from_u64(worker_seed(self.base_seed, slice.start));

        for seed_index in slice {
            let seed = Seed::draw(&mut rng);
            self.log.append(&LogRecord::SeedHeader { seed_index, seed })?;

            let result = walker::walk(seed_index, seed, self.policy, &mut rng, |hop| {
                self.log.append(&LogRecord::Hop(*hop))
            })?;

            self.log.append(&LogRecord::Footer(result))?;
            progress.record_seed(result.hop_count);
            if slots[seed_index].set(result).is_err() {
                bail!("seed index {} completed twice", seed_index);
            }
        }

        debug!(worker, "worker slice done");
        Ok(())
    }
}
