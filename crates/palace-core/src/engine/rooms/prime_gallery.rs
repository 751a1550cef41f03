use super::{Room, RoomDimensions, section_heading};
use crate::core::models::room_type::RoomType;
use crate::core::numbers::sieve::{PrimeSet, PrimeSieve};
use crate::core::numbers::spiral::{AnnotatedSpiralGrid, SpiralLayout};
use crate::engine::config::PrimeGalleryConfig;
use crate::engine::error::EngineError;
use std::fmt::{self, Write};
use tracing::debug;

pub const PRIMES_PER_ROW: usize = 10;
pub const PRIME_MARK: &str = "⭐ ";
pub const COMPOSITE_MARK: &str = "·  ";

/// Primes arranged on an Ulam spiral.
pub struct PrimeGallery {
    primes: PrimeSet,
    displayed_primes: usize,
    spiral_size: usize,
    layout: SpiralLayout,
}

impl PrimeGallery {
    pub fn new(config: &PrimeGalleryConfig) -> Result<Self, EngineError> {
        let primes = PrimeSieve::new()
            .with_max_count(config.max_prime_count)
            .generate(config.prime_count)?;
        debug!(
            count = primes.len(),
            largest = primes.largest(),
            "Prime gallery stocked."
        );
        Ok(Self {
            primes,
            displayed_primes: config.displayed_primes,
            spiral_size: config.spiral_size,
            layout: SpiralLayout::new().with_max_size(config.max_spiral_size),
        })
    }

    pub fn primes(&self) -> &PrimeSet {
        &self.primes
    }

    pub fn spiral(&self) -> Result<AnnotatedSpiralGrid, EngineError> {
        Ok(self.layout.build(self.spiral_size)?.annotate(&self.primes))
    }
}

impl Room for PrimeGallery {
    fn room_type(&self) -> RoomType {
        RoomType::PrimeGallery
    }

    fn dimensions(&self) -> RoomDimensions {
        RoomDimensions::finite(10_000, 10_000, 100)
    }

    fn render_contents(&self, out: &mut String) -> Result<(), EngineError> {
        section_heading(out, "🔢 Inside the Prime Gallery:")?;

        let shown = self.displayed_primes.min(self.primes.len());
        writeln!(out, "\n✨ The First {} Sacred Primes:", shown)?;
        write_prime_rows(out, &self.primes, shown, PRIMES_PER_ROW)?;

        writeln!(
            out,
            "\n🌀 Ulam Spiral ({0}×{0} fragment):",
            self.spiral_size
        )?;
        write_spiral(out, &self.spiral()?)?;

        writeln!(out, "\n💫 Patterns emerge from the primordial chaos.")?;
        writeln!(out, "   Nobody knows why they line up like this.\n")?;
        Ok(())
    }
}

/// Writes the first `take` primes as bracketed rows of `per_row`.
pub fn write_prime_rows(out: &mut impl Write, primes: &PrimeSet, take: usize, per_row: usize) -> fmt::Result {
    for row in primes.rows(take, per_row) {
        writeln!(out, "    {:?}", row)?;
    }
    Ok(())
}

/// Writes the spiral with a star on prime cells and a dot elsewhere.
pub fn write_spiral(out: &mut impl Write, grid: &AnnotatedSpiralGrid) -> fmt::Result {
    for row in grid.rows() {
        let line: String = row
            .iter()
            .map(|cell| if cell.is_prime { PRIME_MARK } else { COMPOSITE_MARK })
            .collect();
        writeln!(out, "   {}", line)?;
    }
    Ok(())
}
