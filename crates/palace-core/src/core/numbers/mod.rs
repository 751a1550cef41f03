//! # Numbers Module
//!
//! Deterministic numeric builders behind the palace exhibits.
//!
//! - [`sieve`] - First `n` primes via a self-widening sieve of Eratosthenes
//! - [`spiral`] - Ulam spiral layout and its prime overlay
//! - [`sorting`] - Step-by-step trace of a Lomuto quicksort
//! - [`sequences`] - Fibonacci sequences and golden-ratio estimates
//! - [`patterns`] - Radial symmetry, identity matrix and Pythagoras tree layouts
//!
//! Every builder validates its input and returns a [`NumericError`] instead of panicking.

use thiserror::Error;

pub mod patterns;
pub mod sequences;
pub mod sieve;
pub mod sorting;
pub mod spiral;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumericError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{quantity} of {value} exceeds the configured limit of {limit}")]
    LimitExceeded {
        quantity: &'static str,
        value: usize,
        limit: usize,
    },

    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}
