//! # Digital Palace Core Library
//!
//! The computational heart of the Digital Palace: a small set of deterministic numeric
//! builders (a prime sieve, an Ulam spiral layout, sorting and sequence traces) together
//! with the rooms that display them, the visitor registry and the persistent guestbook.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless numeric builders (`PrimeSieve`, `SpiralLayout`),
//!   plain data models (`Visitor`, `Signature`, `RoomType`) and guestbook I/O.
//!
//! - **[`engine`]: The Logic Core.** The stateful `Palace`, its rooms and their rendering,
//!   configuration, error types and progress reporting.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures such as a guided tour that
//!   ties the `engine` and `core` together behind a single call.

pub mod core;
pub mod engine;
pub mod workflows;
