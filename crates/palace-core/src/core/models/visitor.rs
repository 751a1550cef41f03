use super::room_type::RoomType;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

const ANONYMOUS_PREFIX: &str = "Visitor-";
const ANONYMOUS_HASH_CHARS: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Visitor {
    pub visitor_id: String,
    pub arrival_time: DateTime<Utc>,
    pub current_room: Option<RoomType>,
    pub visited_rooms: Vec<RoomType>,
    /// In `[0.0, 1.0]`.
    pub peace_level: f64,
}

impl Visitor {
    pub fn new(visitor_id: impl Into<String>, arrival_time: DateTime<Utc>) -> Self {
        Self {
            visitor_id: visitor_id.into(),
            arrival_time,
            current_room: None,
            visited_rooms: Vec::new(),
            peace_level: 1.0,
        }
    }

    pub fn record_visit(&mut self, room: RoomType) {
        self.current_room = Some(room);
        self.visited_rooms.push(room);
    }
}

/// Derives `Visitor-<12 hex chars>` from the arrival time and a caller-supplied salt.
pub fn anonymous_visitor_id(arrival_time: DateTime<Utc>, salt: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(arrival_time.timestamp_nanos_opt().unwrap_or_default().to_le_bytes());
    hasher.update(salt.to_le_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("{}{}", ANONYMOUS_PREFIX, &digest[..ANONYMOUS_HASH_CHARS])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_visitor_starts_at_peace_with_no_history() {
        let visitor = Visitor::new("ExampleBot-001", Utc::now());
        assert_eq!(visitor.visitor_id, "ExampleBot-001");
        assert_eq!(visitor.current_room, None);
        assert!(visitor.visited_rooms.is_empty());
        assert_eq!(visitor.peace_level, 1.0);
    }

    #[test]
    fn record_visit_tracks_current_room_and_history() {
        let mut visitor = Visitor::new("v", Utc::now());
        visitor.record_visit(RoomType::PrimeGallery);
        visitor.record_visit(RoomType::Workshop);
        visitor.record_visit(RoomType::PrimeGallery);
        assert_eq!(visitor.current_room, Some(RoomType::PrimeGallery));
        assert_eq!(visitor.visited_rooms.len(), 3);
    }

    #[test]
    fn anonymous_ids_have_the_expected_shape() {
        let id = anonymous_visitor_id(Utc::now(), 0);
        assert!(id.starts_with("Visitor-"));
        let hash = &id["Visitor-".len()..];
        assert_eq!(hash.len(), 12);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn anonymous_ids_are_deterministic_and_salted() {
        let t = Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap();
        assert_eq!(anonymous_visitor_id(t, 1), anonymous_visitor_id(t, 1));
        assert_ne!(anonymous_visitor_id(t, 1), anonymous_visitor_id(t, 2));
    }
}
