//! # Range: 8-Digit Seeds and Wrap-Around Arithmetic
//!
//! A `Seed` is a `u32` known to lie in `[LOWER, UPPER]`. The only way to move a
//! seed is `wrap`, which applies a signed delta of any magnitude and folds the
//! result back into the range with Euclidean (always non-negative) modulo
//! over `WIDTH`:
//!
//! ```text
//! wrapped = (current ± delta - LOWER) mod WIDTH + LOWER
//! ```
//!
//! Arithmetic is done in `i128`, so neither deltas far wider than the range nor
//! negative intermediate targets can overflow or leave the range.

use rand::Rng;
use serde::Serialize;
use std::fmt;

use crate::{LOWER, UPPER, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Seed(u32);

impl Seed {
    /// Returns `None` unless `value` has exactly eight decimal digits.
    pub fn new(value: u32) -> Option<Seed> {
        (LOWER..=UPPER).contains(&value).then_some(Seed(value))
    }

    /// Uniform draw from `[LOWER, UPPER]`.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Seed {
        Seed(rng.gen_range(LOWER..=UPPER))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Fair coin flip.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Sign {
        if rng.gen_bool(0.5) {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Apply `sign * delta` to `current` and fold the result into the seed range.
pub fn wrap(current: Seed, delta: u64, sign: Sign) -> Seed {
    let delta = delta as i128;
    let target = match sign {
        Sign::Plus => current.0 as i128 + delta,
        Sign::Minus => current.0 as i128 - delta,
    };
    let offset = (target - LOWER as i128).rem_euclid(WIDTH as i128);
    // offset < WIDTH, so the sum is at most UPPER
    Seed((offset + LOWER as i128) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seed(v: u32) -> Seed {
        Seed::new(v).unwrap()
    }

    // ── Seed Construction ───────────────────────────────────────────

    #[test]
    fn seed_rejects_values_outside_eight_digits() {
        assert!(Seed::new(LOWER - 1).is_none());
        assert!(Seed::new(UPPER + 1).is_none());
        assert!(Seed::new(0).is_none());
        assert_eq!(Seed::new(LOWER).map(Seed::get), Some(LOWER));
        assert_eq!(Seed::new(UPPER).map(Seed::get), Some(UPPER));
    }

    // ── Wrap-Around ─────────────────────────────────────────────────

    /// Targets below LOWER must use the non-negative modulo; a truncating
    /// remainder would produce a value under 10,000,000 here.
    #[test]
    fn below_lower_wraps_to_top_of_range() {
        // 10000000 - 5 = 9999995 -> (-5 mod 90000000) + LOWER
        assert_eq!(wrap(seed(10_000_000), 5, Sign::Minus).get(), 99_999_995);
        assert_eq!(wrap(seed(LOWER), 1, Sign::Minus).get(), UPPER);
    }

    #[test]
    fn above_upper_wraps_to_bottom_of_range() {
        assert_eq!(wrap(seed(UPPER), 1, Sign::Plus).get(), LOWER);
        assert_eq!(wrap(seed(99_999_990), 15, Sign::Plus).get(), 10_000_005);
    }

    #[test]
    fn in_range_moves_are_plain_arithmetic() {
        assert_eq!(wrap(seed(50_000_000), 1_000, Sign::Plus).get(), 50_001_000);
        assert_eq!(wrap(seed(50_000_000), 1_000, Sign::Minus).get(), 49_999_000);
        assert_eq!(wrap(seed(50_000_000), 0, Sign::Minus).get(), 50_000_000);
    }

    #[test]
    fn full_width_delta_is_identity() {
        let s = seed(12_345_678);
        assert_eq!(wrap(s, WIDTH, Sign::Plus), s);
        assert_eq!(wrap(s, WIDTH, Sign::Minus), s);
        assert_eq!(wrap(s, 7 * WIDTH, Sign::Minus), s);
    }

    /// Deltas many times wider than the range, up to u64::MAX, never leave it.
    #[test]
    fn huge_deltas_stay_in_range() {
        for &d in &[u64::MAX, u64::MAX / 3, 10 * WIDTH + 17, UPPER as u64 * 2] {
            for sign in [Sign::Plus, Sign::Minus] {
                let v = wrap(seed(LOWER), d, sign).get();
                assert!((LOWER..=UPPER).contains(&v), "{} {} -> {}", sign, d, v);
            }
        }
    }

    // ── Random Draws ────────────────────────────────────────────────

    #[test]
    fn draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let s = Seed::draw(&mut rng).get();
            assert!((LOWER..=UPPER).contains(&s));
        }
    }

    #[test]
    fn sign_display() {
        assert_eq!(Sign::Plus.to_string(), "+");
        assert_eq!(Sign::Minus.to_string(), "-");
    }
}
