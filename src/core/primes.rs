use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// Distinct prime factors of a number, in ascending order
pub type FactorSet = BTreeSet<u64>;

/// Errors raised by the prime factor oracle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimeError {
    #[error("Invalid argument: prime factorization requires n >= 1, got {0}")]
    InvalidArgument(u64),
}

/// Memoized knowledge of confirmed primes
///
/// Every prime greater than 3 has the form `6k - 1` or `6k + 1`. Candidates of
/// that form are validated by trial division against smaller confirmed primes,
/// and the watermark advances over each candidate once every candidate below
/// it has been decided, so nothing at or below it is ever validated twice.
///
/// Invariant: every prime `<=` the watermark is in the known set. Primes above
/// the watermark may also be known when they were validated out of order. The
/// set only grows until [`PrimeCache::reset`] is called.
#[derive(Debug, Clone)]
pub struct PrimeCache {
    known: HashSet<u64>,
    watermark: u64,
}

impl PrimeCache {
    /// Create a cache seeded with 2 and 3, which the 6k±1 scan cannot validate
    pub fn new() -> Self {
        Self {
            known: HashSet::from([2, 3]),
            watermark: 3,
        }
    }

    /// Restore the seeded state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Largest value whose primality has been conclusively determined
    pub fn watermark(&self) -> u64 {
        self.watermark
    }

    #[inline]
    pub fn is_known_prime(&self, n: u64) -> bool {
        self.known.contains(&n)
    }

    /// Snapshot of the confirmed primes in ascending order
    pub fn known_primes(&self) -> Vec<u64> {
        let mut primes: Vec<u64> = self.known.iter().copied().collect();
        primes.sort_unstable();
        primes
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// Remember a decided candidate, advancing the watermark when contiguous
    fn record(&mut self, candidate: u64, prime: bool) {
        if prime && self.known.insert(candidate) {
            tracing::trace!("Confirmed prime: {}", candidate);
        }
        if candidate == next_candidate(self.watermark) {
            self.watermark = candidate;
        }
    }
}

impl Default for PrimeCache {
    fn default() -> Self {
        Self::new()
    }
}

/// The two possible primes generated by step `k` of the scan
#[inline]
fn candidate_pair(k: u64) -> [u64; 2] {
    let pivot = 6 * k;
    [pivot - 1, pivot + 1]
}

/// The 6k±1 value following `n`
#[inline]
fn next_candidate(n: u64) -> u64 {
    match n {
        0..=4 => 5,
        _ if n % 6 == 5 => n + 2,
        _ => n + 4,
    }
}

/// Validate a 6k±1 candidate lying above the watermark
fn validate_candidate(candidate: u64, cache: &mut PrimeCache) -> bool {
    debug_assert!(candidate > cache.watermark());
    debug_assert!(candidate % 2 != 0 && candidate % 3 != 0);

    let prime = cache.is_known_prime(candidate) || !has_prime_divisor(candidate, cache);
    cache.record(candidate, prime);
    prime
}

/// Trial division by the 6k±1 primes up to the square root of `candidate`
///
/// Divisors still above the watermark are validated first, in ascending order.
fn has_prime_divisor(candidate: u64, cache: &mut PrimeCache) -> bool {
    let mut k = 1;
    loop {
        for p in candidate_pair(k) {
            if p * p > candidate {
                return false;
            }
            if p > cache.watermark() {
                validate_candidate(p, cache);
            }
            if candidate % p == 0 && cache.is_known_prime(p) {
                return true;
            }
        }
        k += 1;
    }
}

/// Check whether `n` is prime, memoizing every prime confirmed along the way
///
/// # Errors
/// Returns [`PrimeError::InvalidArgument`] when `n` is 0.
pub fn is_prime(n: u64, cache: &mut PrimeCache) -> Result<bool, PrimeError> {
    let prime = match n {
        0 => return Err(PrimeError::InvalidArgument(n)),
        1 => false,
        2 | 3 => true,
        _ if n % 2 == 0 || n % 3 == 0 => false,
        // Coprime to 6 and already covered by the watermark
        _ if n <= cache.watermark() => cache.is_known_prime(n),
        _ => validate_candidate(n, cache),
    };
    Ok(prime)
}

/// Find the distinct prime factors of `n`
///
/// 2 and 3 are tested directly. Above 4 the scan walks the 6k±1 candidate
/// pairs until the high candidate reaches `n`, validating each candidate above
/// the watermark before it may count as a factor. A candidate that divides `n`
/// but was not confirmed prime is never reported.
///
/// Multiplicities are dropped: `factors_of(12)` is `{2, 3}`.
///
/// # Errors
/// Returns [`PrimeError::InvalidArgument`] when `n` is 0.
pub fn factors_of(n: u64, cache: &mut PrimeCache) -> Result<FactorSet, PrimeError> {
    if n == 0 {
        return Err(PrimeError::InvalidArgument(n));
    }

    let mut factors = FactorSet::new();
    if n == 1 {
        return Ok(factors);
    }

    if n % 2 == 0 {
        factors.insert(2);
    }
    if n % 3 == 0 {
        factors.insert(3);
    }

    if n > 4 {
        let mut k = 1;
        loop {
            let pair = candidate_pair(k);
            for p in pair {
                if p > cache.watermark() {
                    validate_candidate(p, cache);
                }
                if n % p == 0 && cache.is_known_prime(p) {
                    factors.insert(p);
                }
            }
            if pair[1] >= n {
                break;
            }
            k += 1;
        }
    }

    Ok(factors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u64]) -> FactorSet {
        values.iter().copied().collect()
    }

    #[test]
    fn test_zero_is_rejected() {
        let mut cache = PrimeCache::new();
        assert_eq!(factors_of(0, &mut cache), Err(PrimeError::InvalidArgument(0)));
        assert_eq!(is_prime(0, &mut cache), Err(PrimeError::InvalidArgument(0)));
    }

    #[test]
    fn test_one_has_no_factors() {
        let mut cache = PrimeCache::new();
        assert!(factors_of(1, &mut cache).unwrap().is_empty());
        assert!(!is_prime(1, &mut cache).unwrap());
    }

    #[test]
    fn test_small_values() {
        let mut cache = PrimeCache::new();
        assert_eq!(factors_of(2, &mut cache).unwrap(), set(&[2]));
        assert_eq!(factors_of(3, &mut cache).unwrap(), set(&[3]));
        assert_eq!(factors_of(4, &mut cache).unwrap(), set(&[2]));
        assert_eq!(factors_of(5, &mut cache).unwrap(), set(&[5]));
        assert_eq!(factors_of(6, &mut cache).unwrap(), set(&[2, 3]));
        assert_eq!(factors_of(7, &mut cache).unwrap(), set(&[7]));
    }

    #[test]
    fn test_repeated_factors_are_distinct() {
        let mut cache = PrimeCache::new();
        assert_eq!(factors_of(12, &mut cache).unwrap(), set(&[2, 3]));
        assert_eq!(factors_of(25, &mut cache).unwrap(), set(&[5]));
        assert_eq!(factors_of(49, &mut cache).unwrap(), set(&[7]));
        assert_eq!(factors_of(360, &mut cache).unwrap(), set(&[2, 3, 5]));
    }

    #[test]
    fn test_composite_candidates_are_not_factors() {
        // 25 and 35 are 6k±1 values that divide 175 but are not prime
        let mut cache = PrimeCache::new();
        assert_eq!(factors_of(175, &mut cache).unwrap(), set(&[5, 7]));
    }

    #[test]
    fn test_is_prime_matches_trial_division() {
        let mut cache = PrimeCache::new();
        for n in 1..500u64 {
            let expected = n > 1 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
            assert_eq!(is_prime(n, &mut cache).unwrap(), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_watermark_tracks_confirmed_primes() {
        let mut cache = PrimeCache::new();
        assert_eq!(cache.watermark(), 3);

        factors_of(30, &mut cache).unwrap();
        // Scan stops at the pair (29, 31); 31 is confirmed on the way
        assert_eq!(cache.watermark(), 31);
        assert_eq!(cache.known_primes(), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31]);
    }

    #[test]
    fn test_large_prime_on_cold_cache() {
        let mut cache = PrimeCache::new();
        assert!(is_prime(1_000_003, &mut cache).unwrap());
        assert!(!is_prime(1_000_001, &mut cache).unwrap());

        // Only divisors up to the square root were validated
        assert!(cache.watermark() < 1_100);
        assert!(cache.is_known_prime(1_000_003));
        assert!(cache.len() < 200);
    }

    #[test]
    fn test_out_of_order_history_matches_trial_division() {
        let mut values: Vec<u64> = (1..5_000).collect();
        // Deterministic Fisher-Yates shuffle
        let mut state: u64 = 0x2545_F491_4F6C_DD1D;
        for i in (1..values.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            values.swap(i, (state % (i as u64 + 1)) as usize);
        }

        let mut cache = PrimeCache::new();
        for n in values {
            let expected = n > 1 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
            assert_eq!(is_prime(n, &mut cache).unwrap(), expected, "n = {}", n);
        }

        let known = cache.known_primes();
        let watermark = cache.watermark();
        for n in 2..=watermark {
            let expected = (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
            assert_eq!(known.binary_search(&n).is_ok(), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_cache_only_grows_and_reset_restores_seed() {
        let mut cache = PrimeCache::new();
        factors_of(100, &mut cache).unwrap();
        let before = cache.len();
        factors_of(10, &mut cache).unwrap();
        assert_eq!(cache.len(), before);

        cache.reset();
        assert_eq!(cache.known_primes(), vec![2, 3]);
        assert_eq!(cache.watermark(), 3);
    }

    #[test]
    fn test_results_independent_of_cache_history() {
        let mut warm = PrimeCache::new();
        factors_of(997, &mut warm).unwrap();

        for n in [1u64, 10, 77, 91, 143, 221, 997] {
            let mut cold = PrimeCache::new();
            assert_eq!(factors_of(n, &mut warm).unwrap(), factors_of(n, &mut cold).unwrap());
        }
    }
}
