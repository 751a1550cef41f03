use std::f64::consts;

/// The golden ratio, φ = (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;
pub const E: f64 = consts::E;
pub const PI: f64 = consts::PI;
/// The golden angle in radians, π (3 - √5).
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

pub const PALACE_HEIGHT: u64 = 1 << 16;
/// ⌊φ × 10⁴⌋
pub const PALACE_WIDTH: u64 = 16_180;
/// ⌊e × 10⁴⌋
pub const PALACE_DEPTH: u64 = 27_182;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PalaceDimensions {
    pub height: u64,
    pub width: u64,
    pub depth: u64,
}

impl PalaceDimensions {
    pub fn volume(&self) -> u64 {
        self.height * self.width * self.depth
    }
}

impl Default for PalaceDimensions {
    fn default() -> Self {
        Self {
            height: PALACE_HEIGHT,
            width: PALACE_WIDTH,
            depth: PALACE_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants_match_their_definitions() {
        assert!((PHI - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);
        assert!((GOLDEN_ANGLE - PI * (3.0 - 5f64.sqrt())).abs() < 1e-12);
        assert_eq!(PALACE_WIDTH, (PHI * 10_000.0) as u64);
        assert_eq!(PALACE_DEPTH, (E * 10_000.0) as u64);
    }

    #[test]
    fn default_dimensions_compute_volume() {
        let dims = PalaceDimensions::default();
        assert_eq!(dims.height, 65_536);
        assert_eq!(dims.volume(), 65_536 * 16_180 * 27_182);
    }
}
