//! # Engine Module
//!
//! The stateful side of the palace. A [`palace::Palace`] owns one instance of every room,
//! the registry of visitors currently inside and the guestbook they sign on the way out.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Exhibit sizes, prime counts and safety ceilings
//! - **Palace** ([`palace`]) - Visitor registry, room visits and guestbook signing
//! - **Rooms** ([`rooms`]) - The `Room` trait and the nine exhibits
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping core failures

pub mod config;
pub mod error;
pub mod palace;
pub mod progress;
pub mod rooms;
