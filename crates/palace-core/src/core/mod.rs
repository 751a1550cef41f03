//! # Core Module
//!
//! Stateless building blocks of the palace.
//!
//! - **Numbers** ([`numbers`]) - Prime sieve, Ulam spiral layout, quicksort trace,
//!   Fibonacci sequences and the small geometric patterns shown in the rooms
//! - **Models** ([`models`]) - Room kinds, visitors and guestbook signatures
//! - **File I/O** ([`io`]) - JSON persistence of the guestbook
//! - **Constants** ([`constants`]) - Mathematical constants and palace dimensions
//!
//! Nothing in this layer performs console output or holds state between calls.

pub mod constants;
pub mod io;
pub mod models;
pub mod numbers;
