use super::NumericError;
use std::collections::HashSet;
use tracing::{debug, instrument};

pub const DEFAULT_MAX_PRIME_COUNT: usize = 1_000_000;
/// Initial sieve bound is `count * DEFAULT_BOUND_FACTOR`.
pub const DEFAULT_BOUND_FACTOR: usize = 15;

/// The first `n` primes in ascending order, with constant-time membership tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeSet {
    primes: Vec<usize>,
    members: HashSet<usize>,
}

impl PrimeSet {
    fn from_sorted(primes: Vec<usize>) -> Self {
        let members = primes.iter().copied().collect();
        Self { primes, members }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.primes
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn contains(&self, value: usize) -> bool {
        self.members.contains(&value)
    }

    pub fn largest(&self) -> Option<usize> {
        self.primes.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.primes.iter().copied()
    }

    /// Splits the first `take` primes into rows of at most `per_row` entries.
    pub fn rows(&self, take: usize, per_row: usize) -> impl Iterator<Item = &[usize]> {
        let end = take.min(self.primes.len());
        self.primes[..end].chunks(per_row.max(1))
    }
}

impl From<PrimeSet> for Vec<usize> {
    fn from(set: PrimeSet) -> Self {
        set.primes
    }
}

/// Sieve of Eratosthenes that widens its bound until it has enough primes.
///
/// The first attempt sieves up to `count * bound_factor`. When that bound holds fewer
/// than `count` primes the bound is doubled and the sieve runs again, so a successful
/// call always yields exactly `count` primes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeSieve {
    max_count: usize,
    bound_factor: usize,
}

impl Default for PrimeSieve {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_PRIME_COUNT,
            bound_factor: DEFAULT_BOUND_FACTOR,
        }
    }
}

impl PrimeSieve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn with_bound_factor(mut self, factor: usize) -> Self {
        self.bound_factor = factor.max(1);
        self
    }

    #[instrument(level = "debug", skip(self))]
    pub fn generate(&self, count: usize) -> Result<PrimeSet, NumericError> {
        if count == 0 {
            return Err(NumericError::InvalidArgument(
                "prime count must be at least 1".to_string(),
            ));
        }
        if count > self.max_count {
            return Err(NumericError::LimitExceeded {
                quantity: "prime count",
                value: count,
                limit: self.max_count,
            });
        }

        let mut limit = count
            .checked_mul(self.bound_factor)
            .ok_or(NumericError::Overflow("sieve bound"))?;

        loop {
            let mut primes = sieve(limit);
            if primes.len() >= count {
                primes.truncate(count);
                debug!(count, limit, "Sieve produced the requested primes.");
                return Ok(PrimeSet::from_sorted(primes));
            }

            debug!(
                found = primes.len(),
                count, limit, "Sieve bound undershot, doubling it."
            );
            limit = limit
                .checked_mul(2)
                .ok_or(NumericError::Overflow("sieve bound"))?;
        }
    }
}

/// Returns the first `count` primes using the default sieve settings.
pub fn generate_primes(count: usize) -> Result<PrimeSet, NumericError> {
    PrimeSieve::default().generate(count)
}

/// All primes strictly below `limit`.
fn sieve(limit: usize) -> Vec<usize> {
    let mut is_prime = vec![true; limit];
    for slot in is_prime.iter_mut().take(2) {
        *slot = false;
    }

    let mut i = 2;
    while i * i < limit {
        if is_prime[i] {
            for multiple in (i * i..limit).step_by(i) {
                is_prime[multiple] = false;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(n, &prime)| prime.then_some(n))
        .collect()
}
