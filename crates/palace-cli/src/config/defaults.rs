use palace::core::io::guestbook::DEFAULT_GUESTBOOK_FILE;
use palace::core::numbers::sieve::DEFAULT_MAX_PRIME_COUNT;
use palace::core::numbers::sorting::DEFAULT_QUICKSORT_INPUT;
use palace::core::numbers::spiral::DEFAULT_MAX_SPIRAL_SIZE;
use palace::engine::config as core_config;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub prime_count: usize,
    pub displayed_primes: usize,
    pub spiral_size: usize,
    pub max_prime_count: usize,
    pub max_spiral_size: usize,
    pub radial_size: usize,
    pub identity_size: usize,
    pub tree_depth: usize,
    pub fibonacci_terms: usize,
    pub sonata_movements: usize,
    pub quicksort_input: Vec<i64>,
    pub guestbook: PathBuf,
    pub pause_ms: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            prime_count: core_config::DEFAULT_PRIME_COUNT,
            displayed_primes: core_config::DEFAULT_DISPLAYED_PRIMES,
            spiral_size: core_config::DEFAULT_SPIRAL_SIZE,
            max_prime_count: DEFAULT_MAX_PRIME_COUNT,
            max_spiral_size: DEFAULT_MAX_SPIRAL_SIZE,
            radial_size: core_config::DEFAULT_RADIAL_SIZE,
            identity_size: core_config::DEFAULT_IDENTITY_SIZE,
            tree_depth: core_config::DEFAULT_TREE_DEPTH,
            fibonacci_terms: core_config::DEFAULT_FIBONACCI_TERMS,
            sonata_movements: core_config::DEFAULT_SONATA_MOVEMENTS,
            quicksort_input: DEFAULT_QUICKSORT_INPUT.to_vec(),
            guestbook: PathBuf::from(DEFAULT_GUESTBOOK_FILE),
            pause_ms: 2000,
        }
    }
}
