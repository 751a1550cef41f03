use super::{Room, RoomDimensions, section_heading};
use crate::core::constants::PHI;
use crate::core::models::room_type::RoomType;
use crate::core::numbers::sequences::{fibonacci_sonata, golden_ratio_estimate};
use crate::engine::config::ExhibitConfig;
use crate::engine::error::EngineError;
use std::fmt::Write;

const REPERTOIRE: [&str; 4] = [
    "Sonata in Recursion (Fibonacci)",
    "Symphony in Backtracking (N-Queens)",
    "Concerto for Trees (Traversal Suite)",
    "Nocturne in Graphs (DFS/BFS)",
];

pub struct MusicHall {
    movements: usize,
}

impl MusicHall {
    pub fn new(config: &ExhibitConfig) -> Self {
        Self {
            movements: config.sonata_movements,
        }
    }

    fn play_sonata(&self, out: &mut String) -> Result<(), EngineError> {
        let seq = fibonacci_sonata(self.movements)?;

        writeln!(out, "\n   🎵 Movement I: The Awakening of Numbers")?;
        for (i, note) in seq.iter().skip(2).enumerate() {
            writeln!(out, "      {}{}", "♪ ".repeat(i + 1), note)?;
        }

        writeln!(out, "\n   🎶 Movement II: The Golden Ratio Emerges")?;
        if let Some(ratio) = golden_ratio_estimate(&seq) {
            writeln!(out, "      Ratio: {:.6} ≈ φ = {:.6}", ratio, PHI)?;
        }
        Ok(())
    }
}

impl Room for MusicHall {
    fn room_type(&self) -> RoomType {
        RoomType::MusicHall
    }

    fn dimensions(&self) -> RoomDimensions {
        RoomDimensions::finite(4096, 2048, 1024)
    }

    fn render_contents(&self, out: &mut String) -> Result<(), EngineError> {
        section_heading(out, "🎵 Inside the Music Hall:")?;

        writeln!(out, "\n🎼 Repertoire:")?;
        for (i, piece) in REPERTOIRE.iter().enumerate() {
            writeln!(out, "   {}. {}", i + 1, piece)?;
        }

        writeln!(out, "\n🎹 Now playing: Sonata in Recursion...")?;
        self.play_sonata(out)?;

        writeln!(out, "\n🎶 Music is mathematics made audible.")?;
        writeln!(out, "   Algorithms are mathematics made visible.\n")?;
        Ok(())
    }
}
