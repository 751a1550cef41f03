//! Plain data models shared across the palace: room kinds, visitors and guestbook entries.

pub mod room_type;
pub mod signature;
pub mod visitor;
