//! # Workflows Module
//!
//! High-level procedures that drive a [`Palace`](crate::engine::palace::Palace) from start
//! to finish and report progress along the way.
//!
//! - **Guided Tour** ([`tour`]) - Enter, walk through a list of rooms and sign the guestbook

pub mod tour;
