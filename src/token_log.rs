//! # Token Log: Timestamped Per-Family Session Log
//!
//! Letter, digit and emoji tokens are appended to one log file per family
//! (`string.log`, `integer.log`, `emoji.log`). A session opens with a blank
//! line and a header naming the count and style, followed by one timestamped
//! line per token:
//!
//! ```text
//!
//! [2026-10-17 09:30:00] --- Session Start: Generating 2 strings with style 3 ---
//! [2026-10-17 09:30:00] KPAFXCOT
//! [2026-10-17 09:30:00] BGQVHMLQ
//! ```

use anyhow::Result;
use chrono::Local;
use rand::Rng;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::RainError;
use crate::tokens::{self, Family, Style};

/// Local time as `[YYYY-MM-DD HH:MM:SS]`.
pub fn timestamp() -> String {
    Local::now().format("[%Y-%m-%d %H:%M:%S]").to_string()
}

pub struct TokenLog<W: Write = File> {
    sink: W,
    path: Option<PathBuf>,
}

impl TokenLog<File> {
    /// Open (or create) the family's log under `dir` in append mode.
    pub fn open(dir: &Path, family: Family) -> Result<Self, RainError> {
        let path = dir.join(family.log_file());
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| RainError::sink(&path, e))?;
        info!(path = %path.display(), "token log opened");
        Ok(TokenLog {
            sink: file,
            path: Some(path),
        })
    }
}

impl<W: Write> TokenLog<W> {
    pub fn from_writer(sink: W) -> Self {
        TokenLog { sink, path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn session_start(&mut self, family: Family, style: Style, count: usize) -> Result<()> {
        writeln!(
            self.sink,
            "\n{} --- Session Start: Generating {} {} with style {} ---",
            timestamp(),
            count,
            family.noun(),
            style
        )?;
        self.sink.flush()?;
        Ok(())
    }

    pub fn record(&mut self, token: &str) -> Result<()> {
        writeln!(self.sink, "{} {}", timestamp(), token)?;
        self.sink.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Generate `count` tokens, logging the session header and every token.
pub fn run_session<W: Write, R: Rng + ?Sized>(
    log: &mut TokenLog<W>,
    family: Family,
    style: Style,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    log.session_start(family, style, count)?;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let token = tokens::generate(family, style, rng);
        log.record(&token)?;
        out.push(token);
    }
    info!(family = ?family, style = style.number(), count, "token session logged");
    Ok(out)
}
