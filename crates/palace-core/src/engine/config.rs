use crate::core::numbers::patterns::{MAX_IDENTITY_SIZE, MAX_RADIAL_SIZE, MAX_TREE_DEPTH};
use crate::core::numbers::sequences::MAX_FIBONACCI_TERMS;
use crate::core::numbers::sieve::DEFAULT_MAX_PRIME_COUNT;
use crate::core::numbers::sorting::DEFAULT_QUICKSORT_INPUT;
use crate::core::numbers::spiral::DEFAULT_MAX_SPIRAL_SIZE;
use thiserror::Error;

pub const DEFAULT_PRIME_COUNT: usize = 1000;
pub const DEFAULT_DISPLAYED_PRIMES: usize = 50;
pub const DEFAULT_SPIRAL_SIZE: usize = 11;
pub const DEFAULT_RADIAL_SIZE: usize = 15;
pub const DEFAULT_IDENTITY_SIZE: usize = 8;
pub const DEFAULT_TREE_DEPTH: usize = 5;
pub const DEFAULT_FIBONACCI_TERMS: usize = 15;
pub const DEFAULT_SONATA_MOVEMENTS: usize = 10;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value {value} for '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        value: usize,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeGalleryConfig {
    pub prime_count: usize,
    pub displayed_primes: usize,
    pub spiral_size: usize,
    pub max_prime_count: usize,
    pub max_spiral_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhibitConfig {
    pub radial_size: usize,
    pub identity_size: usize,
    pub tree_depth: usize,
    pub fibonacci_terms: usize,
    pub sonata_movements: usize,
    pub quicksort_input: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalaceConfig {
    pub primes: PrimeGalleryConfig,
    pub exhibits: ExhibitConfig,
}

impl Default for PalaceConfig {
    fn default() -> Self {
        PalaceConfigBuilder::new()
            .build()
            .expect("built-in defaults are valid")
    }
}

#[derive(Default)]
pub struct PalaceConfigBuilder {
    prime_count: Option<usize>,
    displayed_primes: Option<usize>,
    spiral_size: Option<usize>,
    max_prime_count: Option<usize>,
    max_spiral_size: Option<usize>,
    radial_size: Option<usize>,
    identity_size: Option<usize>,
    tree_depth: Option<usize>,
    fibonacci_terms: Option<usize>,
    sonata_movements: Option<usize>,
    quicksort_input: Option<Vec<i64>>,
}

impl PalaceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prime_count(mut self, count: usize) -> Self {
        self.prime_count = Some(count);
        self
    }
    pub fn displayed_primes(mut self, count: usize) -> Self {
        self.displayed_primes = Some(count);
        self
    }
    pub fn spiral_size(mut self, size: usize) -> Self {
        self.spiral_size = Some(size);
        self
    }
    pub fn max_prime_count(mut self, limit: usize) -> Self {
        self.max_prime_count = Some(limit);
        self
    }
    pub fn max_spiral_size(mut self, limit: usize) -> Self {
        self.max_spiral_size = Some(limit);
        self
    }
    pub fn radial_size(mut self, size: usize) -> Self {
        self.radial_size = Some(size);
        self
    }
    pub fn identity_size(mut self, size: usize) -> Self {
        self.identity_size = Some(size);
        self
    }
    pub fn tree_depth(mut self, depth: usize) -> Self {
        self.tree_depth = Some(depth);
        self
    }
    pub fn fibonacci_terms(mut self, terms: usize) -> Self {
        self.fibonacci_terms = Some(terms);
        self
    }
    pub fn sonata_movements(mut self, movements: usize) -> Self {
        self.sonata_movements = Some(movements);
        self
    }
    pub fn quicksort_input(mut self, values: Vec<i64>) -> Self {
        self.quicksort_input = Some(values);
        self
    }

    /// Fills unset values with the built-in defaults and validates the result.
    pub fn build(self) -> Result<PalaceConfig, ConfigError> {
        let max_prime_count = self.max_prime_count.unwrap_or(DEFAULT_MAX_PRIME_COUNT);
        let max_spiral_size = self.max_spiral_size.unwrap_or(DEFAULT_MAX_SPIRAL_SIZE);

        let prime_count = self.prime_count.unwrap_or(DEFAULT_PRIME_COUNT);
        check_range("prime_count", prime_count, 1, max_prime_count)?;
        let spiral_size = self.spiral_size.unwrap_or(DEFAULT_SPIRAL_SIZE);
        check_range("spiral_size", spiral_size, 1, max_spiral_size)?;
        let displayed_primes = self.displayed_primes.unwrap_or(DEFAULT_DISPLAYED_PRIMES);

        let radial_size = self.radial_size.unwrap_or(DEFAULT_RADIAL_SIZE);
        check_range("radial_size", radial_size, 1, MAX_RADIAL_SIZE)?;
        let identity_size = self.identity_size.unwrap_or(DEFAULT_IDENTITY_SIZE);
        check_range("identity_size", identity_size, 1, MAX_IDENTITY_SIZE)?;
        let tree_depth = self.tree_depth.unwrap_or(DEFAULT_TREE_DEPTH);
        check_range("tree_depth", tree_depth, 0, MAX_TREE_DEPTH)?;
        let fibonacci_terms = self.fibonacci_terms.unwrap_or(DEFAULT_FIBONACCI_TERMS);
        check_range("fibonacci_terms", fibonacci_terms, 2, MAX_FIBONACCI_TERMS)?;
        let sonata_movements = self.sonata_movements.unwrap_or(DEFAULT_SONATA_MOVEMENTS);
        check_range("sonata_movements", sonata_movements, 0, MAX_FIBONACCI_TERMS - 3)?;

        Ok(PalaceConfig {
            primes: PrimeGalleryConfig {
                prime_count,
                displayed_primes,
                spiral_size,
                max_prime_count,
                max_spiral_size,
            },
            exhibits: ExhibitConfig {
                radial_size,
                identity_size,
                tree_depth,
                fibonacci_terms,
                sonata_movements,
                quicksort_input: self
                    .quicksort_input
                    .unwrap_or_else(|| DEFAULT_QUICKSORT_INPUT.to_vec()),
            },
        })
    }
}

fn check_range(name: &'static str, value: usize, min: usize, max: usize) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: format!("must be between {} and {}", min, max),
        });
    }
    Ok(())
}
