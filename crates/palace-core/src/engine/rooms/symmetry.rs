use super::{Room, RoomDimensions, section_heading};
use crate::core::models::room_type::RoomType;
use crate::core::numbers::patterns::{RadialCell, identity_matrix, radial_symmetry};
use crate::engine::config::ExhibitConfig;
use crate::engine::error::EngineError;
use std::fmt::Write;

pub struct SymmetryHall {
    radial_size: usize,
    identity_size: usize,
}

impl SymmetryHall {
    pub fn new(config: &ExhibitConfig) -> Self {
        Self {
            radial_size: config.radial_size,
            identity_size: config.identity_size,
        }
    }

    fn write_radial(&self, out: &mut String) -> Result<(), EngineError> {
        for row in radial_symmetry(self.radial_size) {
            let line: String = row
                .into_iter()
                .map(|cell| match cell {
                    RadialCell::Ring => "⭐",
                    RadialCell::Interior => "◆ ",
                    RadialCell::Empty => "  ",
                })
                .collect();
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn write_identity(&self, out: &mut String) -> Result<(), EngineError> {
        let matrix = identity_matrix(self.identity_size);
        for row in matrix.row_iter() {
            let cells: String = row.iter().map(|v| format!(" {} ", v)).collect();
            writeln!(out, "   [{}]", cells)?;
        }
        Ok(())
    }
}

impl Room for SymmetryHall {
    fn room_type(&self) -> RoomType {
        RoomType::SymmetryHall
    }

    fn dimensions(&self) -> RoomDimensions {
        RoomDimensions::finite(1024, 1024, 512)
    }

    fn render_contents(&self, out: &mut String) -> Result<(), EngineError> {
        section_heading(out, "🔷 Inside the Hall of Symmetry:")?;

        writeln!(out, "\n⭐ Radial Symmetry (8 axes):")?;
        self.write_radial(out)?;

        writeln!(out, "\n🔲 Floor: Identity Matrix")?;
        self.write_identity(out)?;

        writeln!(out, "\n💭 Here, everything is in perfect balance.")?;
        writeln!(out, "   Contemplate the beauty of mathematical equilibrium.\n")?;
        Ok(())
    }
}
