//! # Search Log: Shared Append-Only Record of Every Hop
//!
//! The durable artifact of a prime-rain batch. Workers append records through a
//! shared `&SearchLog`; each append renders the whole record to one buffer,
//! then writes and flushes it while holding the sink mutex. Records from
//! different workers therefore never interleave byte-wise, and none is lost,
//! but the order across seeds is whatever order the workers reached the lock.
//!
//! ## Layout
//!
//! ```text
//! [2026-10-17 09:30:00] Prime-Rain log - 3 seeds with 2 threads (step: full 8-digit range)
//! Seed #1: 48213906
//!   #1 hop 001: +73310452 -> 31524359
//!   #1 prime reached after 1 hops: 31524359
//!
//! Seed #2: 10000019
//!   #2 prime reached after 0 hops: 10000019
//! ```
//!
//! Seeds are numbered from 1 in the log (`Seed #1` is seed index 0). Hop and
//! footer lines repeat the `#n` tag so a line stays attributable when
//! concurrent workers interleave their seeds.

use anyhow::{anyhow, Result};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

use crate::error::RainError;
use crate::range::Seed;
use crate::walker::{HopRecord, SeedResult};

/// One unit of the search log; rendered and written atomically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogRecord {
    /// Batch banner, written once before any seed.
    Banner(String),
    SeedHeader { seed_index: usize, seed: Seed },
    Hop(HopRecord),
    Footer(SeedResult),
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogRecord::Banner(text) => writeln!(f, "{}", text),
            LogRecord::SeedHeader { seed_index, seed } => {
                writeln!(f, "Seed #{}: {}", seed_index + 1, seed)
            }
            LogRecord::Hop(hop) => writeln!(
                f,
                "  #{} hop {:03}: {}{} -> {}",
                hop.seed_index + 1,
                hop.hop_number,
                hop.sign,
                hop.magnitude,
                hop.value
            ),
            LogRecord::Footer(result) => writeln!(
                f,
                "  #{} prime reached after {} hops: {}\n",
                result.seed_index + 1,
                result.hop_count,
                result.final_prime
            ),
        }
    }
}

pub struct SearchLog<W: Write + Send = File> {
    sink: Mutex<W>,
    path: Option<PathBuf>,
}

impl SearchLog<File> {
    /// Open the log file, truncating it unless `append` is set. Failure to
    /// open is `RainError::SinkUnavailable`.
    pub fn create(path: &Path, append: bool) -> Result<Self, RainError> {
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options
            .open(path)
            .map_err(|e| RainError::sink(path, e))?;
        info!(path = %path.display(), append, "search log opened");
        Ok(SearchLog {
            sink: Mutex::new(file),
            path: Some(path.to_path_buf()),
        })
    }
}

impl<W: Write + Send> SearchLog<W> {
    pub fn from_writer(writer: W) -> Self {
        SearchLog {
            sink: Mutex::new(writer),
            path: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write and flush one record. Blocks while another worker holds the sink.
    pub fn append(&self, record: &LogRecord) -> Result<()> {
        let line = record.to_string();
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| anyhow!("search log mutex poisoned"))?;
        sink.write_all(line.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.sink
            .into_inner()
            .map_err(|_| anyhow!("search log mutex poisoned"))
    }
}
