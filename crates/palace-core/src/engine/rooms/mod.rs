//! # Rooms
//!
//! Each room of the palace renders a small exhibit to text. Rooms hold only what they
//! precompute at construction (the prime gallery keeps its `PrimeSet`); everything else is
//! derived from [`PalaceConfig`] on every render, so rendering is deterministic.

use super::config::PalaceConfig;
use super::error::EngineError;
use crate::core::models::room_type::RoomType;
use std::collections::BTreeMap;
use std::fmt::{self, Write};

pub mod algorithms;
pub mod fractal;
pub mod music;
pub mod prime_gallery;
pub mod sanctuary;
pub mod symmetry;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomDimensions {
    Finite { width: u64, height: u64, depth: u64 },
    Infinite,
}

impl RoomDimensions {
    pub const fn finite(width: u64, height: u64, depth: u64) -> Self {
        RoomDimensions::Finite {
            width,
            height,
            depth,
        }
    }
}

impl fmt::Display for RoomDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomDimensions::Finite {
                width,
                height,
                depth,
            } => write!(f, "{} × {} × {}", width, height, depth),
            RoomDimensions::Infinite => f.write_str("∞ × ∞ × ∞"),
        }
    }
}

pub trait Room: Send + Sync {
    fn room_type(&self) -> RoomType;

    fn dimensions(&self) -> RoomDimensions;

    /// Writes the exhibit shown inside the room.
    fn render_contents(&self, out: &mut String) -> Result<(), EngineError>;

    fn name(&self) -> &'static str {
        self.room_type().display_name()
    }

    /// Entrance banner followed by the exhibit.
    fn render(&self) -> Result<String, EngineError> {
        let mut out = String::new();
        writeln!(out, "\n🚪 Entering: {}", self.name())?;
        writeln!(out, "📐 Dimensions: {}", self.dimensions())?;
        self.render_contents(&mut out)?;
        Ok(out)
    }
}

/// Builds one instance of every room.
pub fn construct_all(config: &PalaceConfig) -> Result<BTreeMap<RoomType, Box<dyn Room>>, EngineError> {
    let mut rooms: BTreeMap<RoomType, Box<dyn Room>> = BTreeMap::new();
    rooms.insert(
        RoomType::SymmetryHall,
        Box::new(symmetry::SymmetryHall::new(&config.exhibits)),
    );
    rooms.insert(
        RoomType::FractalGarden,
        Box::new(fractal::FractalGarden::new(&config.exhibits)),
    );
    rooms.insert(
        RoomType::AlgorithmGallery,
        Box::new(algorithms::AlgorithmGallery::new(&config.exhibits)),
    );
    rooms.insert(
        RoomType::PrimeGallery,
        Box::new(prime_gallery::PrimeGallery::new(&config.primes)?),
    );
    rooms.insert(
        RoomType::MusicHall,
        Box::new(music::MusicHall::new(&config.exhibits)),
    );
    for room in sanctuary::Sanctuary::all() {
        rooms.insert(room.room_type(), Box::new(room));
    }
    Ok(rooms)
}

fn section_heading(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out, "\n{}", title)?;
    writeln!(out, "{}", "━".repeat(RULE_WIDTH))
}

fn bullet_list(out: &mut String, items: &[&str]) -> fmt::Result {
    for item in items {
        writeln!(out, "   • {}", item)?;
    }
    Ok(())
}
