use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::guestbook::GuestbookError;
use crate::core::models::room_type::{RoomType, UnknownRoomError};
use crate::core::numbers::NumericError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Numeric computation failed: {source}")]
    Numeric {
        #[from]
        source: NumericError,
    },

    #[error("Invalid palace configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Visitor '{0}' not found. Please enter the palace first.")]
    VisitorNotFound(String),

    #[error(transparent)]
    UnknownRoom(#[from] UnknownRoomError),

    #[error("Room {0:?} is not part of this palace")]
    RoomMissing(RoomType),

    #[error("Guestbook error: {source}")]
    Guestbook {
        #[from]
        source: GuestbookError,
    },

    #[error("Failed to render room contents")]
    Render(#[from] std::fmt::Error),
}
