//! # Primality: Deterministic Trial Division for 32-bit Values
//!
//! The prime walk only ever tests 8-digit candidates, where trial division by
//! the 6k ± 1 spokes up to √n costs at most ~1,700 divisions. That is cheap
//! enough to run on every hop and, unlike Miller–Rabin, exact without
//! choosing witnesses. The oracle accepts any `u32` so it can be reused on
//! values outside the seed range.
//!
//! `generate_primes` is a plain Eratosthenes sieve over odd numbers. It is the
//! reference the oracle is cross-checked against in tests and benches.

/// Exact primality for any `u32`.
///
/// Rejects n < 2, multiples of 2 and 3 (other than 2 and 3 themselves), then
/// trial-divides by 6k - 1 and 6k + 1 while the divisor squared is ≤ n.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    if n % 3 == 0 {
        return n == 3;
    }
    let n = n as u64;
    let mut f: u64 = 5;
    while f * f <= n {
        if n % f == 0 || n % (f + 2) == 0 {
            return false;
        }
        f += 6;
    }
    true
}

/// All primes ≤ `limit`, ascending.
pub fn generate_primes(limit: u32) -> Vec<u32> {
    if limit < 2 {
        return vec![];
    }
    let limit = limit as usize;
    // composite[i] tracks the odd number 2i + 1
    let mut composite = vec![false; limit / 2 + 1];
    let mut i = 3usize;
    while i * i <= limit {
        if !composite[i / 2] {
            let mut m = i * i;
            while m <= limit {
                composite[m / 2] = true;
                m += 2 * i;
            }
        }
        i += 2;
    }

    let mut primes = Vec::with_capacity(prime_count_estimate(limit));
    primes.push(2);
    primes.extend(
        (3..=limit)
            .step_by(2)
            .filter(|&n| !composite[n / 2])
            .map(|n| n as u32),
    );
    primes
}

/// Upper estimate of π(x) used to size the sieve output.
fn prime_count_estimate(x: usize) -> usize {
    if x < 17 {
        return 7;
    }
    let xf = x as f64;
    (1.26 * xf / xf.ln()) as usize
}

#[cfg(test)]
mod tests {
    //! Oracle and reference sieve tests.
    //!
    //! The sieve is validated against known π(x) values (OEIS A000720), then
    //! the oracle is cross-checked against the sieve over [0, 10^6] and at the
    //! edges of the 8-digit and 32-bit ranges.

    use super::*;

    #[test]
    fn small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
    }

    #[test]
    fn sieve_matches_known_prime_counts() {
        assert_eq!(generate_primes(100).len(), 25);
        assert_eq!(generate_primes(1_000).len(), 168);
        assert_eq!(generate_primes(10_000).len(), 1_229);
        assert_eq!(generate_primes(100_000).len(), 9_592);
    }

    #[test]
    fn sieve_small_limits() {
        assert!(generate_primes(0).is_empty());
        assert!(generate_primes(1).is_empty());
        assert_eq!(generate_primes(2), vec![2]);
        assert_eq!(generate_primes(3), vec![2, 3]);
        assert_eq!(generate_primes(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn oracle_agrees_with_sieve_up_to_one_million() {
        let limit = 1_000_000u32;
        let primes = generate_primes(limit);
        let mut idx = 0;
        for n in 0..=limit {
            let expected = idx < primes.len() && primes[idx] == n;
            if expected {
                idx += 1;
            }
            assert_eq!(is_prime(n), expected, "mismatch at {}", n);
        }
        assert_eq!(idx, 78_498);
    }

    #[test]
    fn eight_digit_boundaries() {
        // 10000007 = 941 * 10627; the first 8-digit prime is 10000019
        assert!(!is_prime(10_000_007));
        assert!(is_prime(10_000_019));
        assert!(!is_prime(crate::LOWER));
        assert!(!is_prime(crate::UPPER));
        assert!(is_prime(99_999_989));
    }

    #[test]
    fn thirty_two_bit_edges_do_not_overflow() {
        assert!(is_prime(2_147_483_647));
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(u32::MAX));
        // 65521^2: largest prime square below 2^32
        assert!(!is_prime(65_521 * 65_521));
    }
}
