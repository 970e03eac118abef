pub mod error;
pub mod pool;
pub mod primality;
pub mod progress;
pub mod range;
pub mod report;
pub mod search_log;
pub mod token_log;
pub mod tokens;
pub mod walker;

pub use error::RainError;
pub use range::{Seed, Sign};

/// Smallest 8-digit value.
pub const LOWER: u32 = 10_000_000;

/// Largest 8-digit value.
pub const UPPER: u32 = 99_999_999;

/// Number of values in `[LOWER, UPPER]`.
pub const WIDTH: u64 = (UPPER - LOWER) as u64 + 1;

/// Default file name of the prime-search log.
pub const SEARCH_LOG_FILE: &str = "prime_rain_log.txt";

/// Hardware concurrency, falling back to a single worker when unknown.
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_covers_every_eight_digit_value() {
        assert_eq!(WIDTH, 90_000_000);
        assert_eq!(LOWER.to_string().len(), 8);
        assert_eq!(UPPER.to_string().len(), 8);
        assert_eq!((UPPER + 1).to_string().len(), 9);
    }

    #[test]
    fn default_worker_count_is_positive() {
        assert!(default_worker_count() >= 1);
    }
}
