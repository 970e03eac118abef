//! # Error: Failure Taxonomy
//!
//! Two kinds of failure can stop a batch before it produces output:
//! rejected request parameters and an unusable log sink. Both are fatal and
//! detected before any generation work starts. Everything else propagates as
//! a plain `anyhow::Error`; the binary downcasts to `RainError` only to word
//! the message, since every failure exits with status 1.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum RainError {
    /// Out-of-range style selector, non-positive count, bad thread count.
    InvalidInput(String),
    /// The log file could not be created or opened.
    SinkUnavailable { path: PathBuf, source: io::Error },
}

impl RainError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        RainError::InvalidInput(msg.into())
    }

    pub fn sink(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RainError::SinkUnavailable {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for RainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RainError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            RainError::SinkUnavailable { path, source } => {
                write!(f, "cannot open log file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for RainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RainError::InvalidInput(_) => None,
            RainError::SinkUnavailable { source, .. } => Some(source),
        }
    }
}

/// Accept a strictly positive count.
pub fn positive_count(count: i64) -> Result<usize, RainError> {
    usize::try_from(count)
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| RainError::invalid(format!("count must be positive, got {}", count)))
}
