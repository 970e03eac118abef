//! # Report: Final Prime-Rain Output
//!
//! Turns a finished batch into terminal text. Two text styles exist: a plain
//! banner with the primes on one line, and a "confetti" style cycling ANSI
//! colours five primes per line. A JSON rendering carries the same data for
//! scripting. Rendering never fails on non-empty input; empty batches are
//! rejected before a batch runs.

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::pool::RainConfig;
use crate::progress::BatchStats;
use crate::walker::SeedResult;

/// Average hop count below which the batch counts as lucky.
pub const LUCKY_THRESHOLD: f64 = 3.0;

const CONFETTI: [&str; 6] = [
    "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m",
];
const RESET: &str = "\x1b[0m";
const PER_LINE: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportStyle {
    #[default]
    Plain,
    Confetti,
}

pub struct ReportFormatter {
    style: ReportStyle,
    log_path: Option<PathBuf>,
}

impl ReportFormatter {
    pub fn new(style: ReportStyle) -> Self {
        ReportFormatter {
            style,
            log_path: None,
        }
    }

    /// Mention where the full hop log was written.
    pub fn with_log_path(mut self, path: &Path) -> Self {
        self.log_path = Some(path.to_path_buf());
        self
    }

    pub fn render(&self, results: &[SeedResult], stats: &BatchStats) -> String {
        let mut out = String::new();
        match self.style {
            ReportStyle::Plain => {
                out.push_str("\n*********************************************\n");
                out.push_str("*           IT'S  RAINING  PRIMES!          *\n");
                out.push_str("*********************************************\n\n");
                let primes: Vec<String> = results.iter().map(|r| r.final_prime.to_string()).collect();
                out.push_str(&primes.join(" "));
                out.push('\n');
            }
            ReportStyle::Confetti => {
                out.push_str("\n\x1b[1m\x1b[7m=>  IT'S  RAINING  8-DIGIT  PRIMES!  <=\x1b[0m\n\n");
                for (i, r) in results.iter().enumerate() {
                    let _ = write!(out, "{}{}{} ", CONFETTI[i % CONFETTI.len()], r.final_prime, RESET);
                    if (i + 1) % PER_LINE == 0 {
                        out.push('\n');
                    }
                }
                if results.len() % PER_LINE != 0 {
                    out.push('\n');
                }
            }
        }

        let avg = stats.average_hops();
        let _ = writeln!(out, "\nAverage hops per seed: {:.2}", avg);
        let _ = writeln!(out, "{}", remark(avg));
        if let Some(path) = &self.log_path {
            let _ = writeln!(out, "(Full journey logged to {})", path.display());
        }
        out
    }
}

/// Qualitative comment on a batch's average hop count.
pub fn remark(average_hops: f64) -> &'static str {
    if average_hops < LUCKY_THRESHOLD {
        "Lucky cloud! The primes fell right into place."
    } else {
        "Those primes played hard-to-get today."
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a RainConfig,
    primes: Vec<u32>,
    average_hops: f64,
    remark: &'static str,
    stats: &'a BatchStats,
    results: &'a [SeedResult],
}

/// Machine-readable report of a finished batch.
pub fn render_json(config: &RainConfig, results: &[SeedResult], stats: &BatchStats) -> Result<String> {
    let avg = stats.average_hops();
    let report = JsonReport {
        config,
        primes: results.iter().map(|r| r.final_prime.get()).collect(),
        average_hops: avg,
        remark: remark(avg),
        stats,
        results,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
