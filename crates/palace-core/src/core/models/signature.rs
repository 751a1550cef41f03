use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a visitor writes when signing the guestbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRequest {
    pub message: String,
    pub favorite_room: String,
    pub will_return: bool,
}

impl Default for SignatureRequest {
    fn default() -> Self {
        Self {
            message: String::new(),
            favorite_room: String::new(),
            will_return: true,
        }
    }
}

/// One guestbook entry as persisted to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub visitor_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub favorite_room: String,
    #[serde(default = "default_will_return")]
    pub will_return: bool,
    #[serde(default)]
    pub rooms_visited: usize,
}

fn default_will_return() -> bool {
    true
}
