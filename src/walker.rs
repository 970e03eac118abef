//! # Walker: Randomized Walk from a Seed to a Prime
//!
//! Starting from an 8-digit seed, the walker tests the current value and, while
//! it is composite, hops by a random signed delta (folded back into the range
//! by `range::wrap`). Every hop produces a `HopRecord`; the walk ends on the
//! first prime value.
//!
//! ## Step Policies
//!
//! | Policy | Magnitude | Character |
//! |--------|-----------|-----------|
//! | `Bounded { max }` | uniform in `[1, max]` | local drift around the seed |
//! | `FullRange` | uniform 8-digit value | each hop lands anywhere in the range |
//!
//! Around 10^8 roughly one value in ln(10^8) ≈ 18 is prime, and about one in 6
//! of the values not divisible by 2 or 3, so walks are short on average. There
//! is no hop ceiling: the length is unbounded in principle and only a fresh
//! seed restarts a walk.
//!
//! ## Determinism
//!
//! All randomness comes from the caller's `Rng`. Given the same seed, policy
//! and generator state, `walk` yields the same hop sequence.

use rand::Rng;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::primality::is_prime;
use crate::range::{self, Seed, Sign};
use crate::{LOWER, UPPER};

/// Default upper bound on hop magnitude for `StepPolicy::Bounded`.
pub const DEFAULT_MAX_STEP: u32 = 1_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum StepPolicy {
    /// Magnitude drawn uniformly from `[1, max]`.
    Bounded { max: u32 },
    /// Magnitude is another uniform 8-digit draw.
    #[default]
    FullRange,
}

impl StepPolicy {
    pub fn draw_magnitude<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match *self {
            StepPolicy::Bounded { max } => rng.gen_range(1..=max.max(1)) as u64,
            StepPolicy::FullRange => rng.gen_range(LOWER..=UPPER) as u64,
        }
    }
}

impl fmt::Display for StepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepPolicy::Bounded { max } => write!(f, "bounded 1..={}", max),
            StepPolicy::FullRange => write!(f, "full 8-digit range"),
        }
    }
}

/// Policy kind as given on the command line; `bounded` picks up its limit
/// separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    Bounded,
    Full,
}

impl StepKind {
    pub fn with_max(self, max: u32) -> StepPolicy {
        match self {
            StepKind::Bounded => StepPolicy::Bounded { max },
            StepKind::Full => StepPolicy::FullRange,
        }
    }
}

impl FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bounded" | "small" => Ok(StepKind::Bounded),
            "full" | "full-range" => Ok(StepKind::Full),
            other => Err(format!(
                "unknown step policy '{}' (expected 'bounded' or 'full')",
                other
            )),
        }
    }
}

/// One perturb-and-test step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HopRecord {
    pub seed_index: usize,
    /// 1-based within the seed's walk.
    pub hop_number: u64,
    pub magnitude: u64,
    pub sign: Sign,
    pub value: Seed,
}

/// Outcome of one seed's walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SeedResult {
    pub seed_index: usize,
    pub original_seed: Seed,
    pub final_prime: Seed,
    pub hop_count: u64,
}

/// A finished walk with its full hop history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedWalk {
    pub result: SeedResult,
    pub hops: Vec<HopRecord>,
}

/// Walk from `seed` until a prime is reached, handing each hop to `on_hop`
/// as it happens. An error from `on_hop` aborts the walk.
pub fn walk<R, F, E>(
    seed_index: usize,
    seed: Seed,
    policy: StepPolicy,
    rng: &mut R,
    mut on_hop: F,
) -> Result<SeedResult, E>
where
    R: Rng + ?Sized,
    F: FnMut(&HopRecord) -> Result<(), E>,
{
    let mut current = seed;
    let mut hops: u64 = 0;

    while !is_prime(current.get()) {
        let magnitude = policy.draw_magnitude(rng);
        let sign = Sign::draw(rng);
        current = range::wrap(current, magnitude, sign);
        hops += 1;

        let hop = HopRecord {
            seed_index,
            hop_number: hops,
            magnitude,
            sign,
            value: current,
        };
        trace!(seed_index, hop = hops, %sign, magnitude, value = %current, "hop");
        on_hop(&hop)?;
    }

    Ok(SeedResult {
        seed_index,
        original_seed: seed,
        final_prime: current,
        hop_count: hops,
    })
}

/// Walk from `seed` and collect the hop history in memory.
pub fn search<R: Rng + ?Sized>(
    seed_index: usize,
    seed: Seed,
    policy: StepPolicy,
    rng: &mut R,
) -> SeedWalk {
    let mut hops = Vec::new();
    let outcome = walk(seed_index, seed, policy, rng, |hop| {
        hops.push(*hop);
        Ok::<(), Infallible>(())
    });
    let result = match outcome {
        Ok(result) => result,
        Err(never) => match never {},
    };
    SeedWalk { result, hops }
}
