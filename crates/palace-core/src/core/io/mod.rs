//! File I/O for palace records.
//!
//! - [`guestbook`] - JSON persistence of guestbook signatures

pub mod guestbook;
