use super::{Room, RoomDimensions, section_heading};
use crate::core::models::room_type::RoomType;
use crate::core::numbers::patterns::pythagoras_tree;
use crate::engine::config::ExhibitConfig;
use crate::engine::error::EngineError;
use std::fmt::Write;

pub struct FractalGarden {
    tree_depth: usize,
}

impl FractalGarden {
    pub fn new(config: &ExhibitConfig) -> Self {
        Self {
            tree_depth: config.tree_depth,
        }
    }
}

impl Room for FractalGarden {
    fn room_type(&self) -> RoomType {
        RoomType::FractalGarden
    }

    fn dimensions(&self) -> RoomDimensions {
        RoomDimensions::Infinite
    }

    fn render_contents(&self, out: &mut String) -> Result<(), EngineError> {
        section_heading(out, "🌿 Inside the Fractal Garden:")?;

        writeln!(out, "\n🌸 Pythagoras Tree:")?;
        for level in pythagoras_tree(self.tree_depth)? {
            writeln!(
                out,
                "{}{}",
                " ".repeat(level.indent),
                "🌳".repeat(level.branches)
            )?;
        }

        writeln!(out, "\n❄️  Koch Snowflake:")?;
        writeln!(out, "   (a fractal with infinite perimeter but finite area)")?;

        writeln!(out, "\n🌀 Every 'plant' holds infinite universes.")?;
        writeln!(out, "   Infinite zoom available (limited only by float64 precision).\n")?;
        Ok(())
    }
}
