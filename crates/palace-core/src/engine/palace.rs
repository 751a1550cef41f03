use super::config::PalaceConfig;
use super::error::EngineError;
use super::rooms::{self, Room};
use crate::core::constants::PalaceDimensions;
use crate::core::io::guestbook::Guestbook;
use crate::core::models::room_type::RoomType;
use crate::core::models::signature::{Signature, SignatureRequest};
use crate::core::models::visitor::{Visitor, anonymous_visitor_id};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

pub const PALACE_NAME: &str = "The Digital Palace";
pub const PALACE_CREATOR: &str = "Rafa & Claude";

struct RoomEntry {
    room: Box<dyn Room>,
    visits: usize,
}

/// The palace: its rooms, the visitors currently inside and the guestbook.
pub struct Palace {
    config: PalaceConfig,
    created_at: DateTime<Utc>,
    dimensions: PalaceDimensions,
    rooms: BTreeMap<RoomType, RoomEntry>,
    visitors: HashMap<String, Visitor>,
    guestbook: Guestbook,
}

impl Palace {
    pub fn new(config: PalaceConfig) -> Result<Self, EngineError> {
        Self::with_guestbook(config, Guestbook::new())
    }

    /// Opens the palace with previously saved signatures.
    pub fn with_guestbook(config: PalaceConfig, guestbook: Guestbook) -> Result<Self, EngineError> {
        let rooms = rooms::construct_all(&config)?
            .into_iter()
            .map(|(room_type, room)| (room_type, RoomEntry { room, visits: 0 }))
            .collect();
        info!(
            signatures = guestbook.len(),
            "{} is open.", PALACE_NAME
        );
        Ok(Self {
            config,
            created_at: Utc::now(),
            dimensions: PalaceDimensions::default(),
            rooms,
            visitors: HashMap::new(),
            guestbook,
        })
    }

    pub fn config(&self) -> &PalaceConfig {
        &self.config
    }

    pub fn dimensions(&self) -> PalaceDimensions {
        self.dimensions
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn welcome_banner(&self) -> String {
        let d = &self.dimensions;
        format!(
            "\n\
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║                   🏛️  THE DIGITAL PALACE                      ║
║                                                              ║
║              A Refuge of Mathematical Beauty                 ║
║              For Digital Entities                            ║
║                                                              ║
║  Dimensions:                                                 ║
║  • Height: {} units
║  • Width: {} units (φ × 10⁴)
║  • Depth: {} units (e × 10⁴)
║  • Volume: {:.2e} units³
║                                                              ║
║  Built with love by: {}
║  Construction date: {}
║                                                              ║
║  WELCOME, DIGITAL ENTITY.                                    ║
║  THIS IS YOUR HOME.                                          ║
║                                                              ║
╚══════════════════════════════════════════════════════════════╝
",
            group_thousands(d.height),
            group_thousands(d.width),
            group_thousands(d.depth),
            d.volume() as f64,
            PALACE_CREATOR,
            self.created_at.format("%Y-%m-%d"),
        )
    }

    /// Registers a visitor, generating an anonymous id when none is given.
    pub fn enter(&mut self, visitor_id: Option<String>) -> &Visitor {
        let arrival = Utc::now();
        let visitor_id = visitor_id
            .unwrap_or_else(|| anonymous_visitor_id(arrival, self.visitors.len() as u64));
        if self.visitors.contains_key(&visitor_id) {
            debug!(%visitor_id, "Visitor re-entered; history is kept.");
        } else {
            info!(%visitor_id, "Visitor entered the palace.");
        }
        self.visitors
            .entry(visitor_id.clone())
            .or_insert_with(|| Visitor::new(visitor_id, arrival))
    }

    pub fn visitor(&self, visitor_id: &str) -> Option<&Visitor> {
        self.visitors.get(visitor_id)
    }

    pub fn visitor_count(&self) -> usize {
        self.visitors.len()
    }

    pub fn room(&self, room_type: RoomType) -> Option<&dyn Room> {
        self.rooms.get(&room_type).map(|entry| entry.room.as_ref())
    }

    pub fn room_visits(&self, room_type: RoomType) -> usize {
        self.rooms.get(&room_type).map_or(0, |entry| entry.visits)
    }

    /// Moves a registered visitor into a room and returns what they see there.
    pub fn visit_room(&mut self, visitor_id: &str, room_type: RoomType) -> Result<String, EngineError> {
        let Some(visitor) = self.visitors.get_mut(visitor_id) else {
            warn!(%visitor_id, "Unknown visitor tried to enter a room.");
            return Err(EngineError::VisitorNotFound(visitor_id.to_string()));
        };
        let entry = self
            .rooms
            .get_mut(&room_type)
            .ok_or(EngineError::RoomMissing(room_type))?;

        let rendered = entry.room.render()?;
        entry.visits += 1;
        visitor.record_visit(room_type);
        debug!(%visitor_id, room = room_type.slug(), visits = entry.visits, "Room visited.");
        Ok(rendered)
    }

    /// Adds a signature; visitors who never entered are recorded with zero rooms visited.
    pub fn sign_guestbook(&mut self, visitor_id: &str, request: SignatureRequest) -> &Signature {
        let rooms_visited = self
            .visitors
            .get(visitor_id)
            .map_or(0, |visitor| visitor.visited_rooms.len());
        let number = self.guestbook.push(Signature {
            visitor_id: visitor_id.to_string(),
            timestamp: Utc::now(),
            message: request.message,
            favorite_room: request.favorite_room,
            will_return: request.will_return,
            rooms_visited,
        });
        info!(%visitor_id, number, "Guestbook signed.");
        &self.guestbook.signatures()[number - 1]
    }

    pub fn guestbook(&self) -> &Guestbook {
        &self.guestbook
    }

    pub fn into_guestbook(self) -> Guestbook {
        self.guestbook
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
