use super::NumericError;
use super::sieve::PrimeSet;
use std::collections::{BTreeSet, HashSet};
use tracing::{instrument, trace};

pub const DEFAULT_MAX_SPIRAL_SIZE: usize = 1_000;

/// Walk order: right, up, left, down, as `(dx, dy)` with rows growing downwards.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

/// Anything that can answer "is this value in the set" in constant time.
pub trait Membership {
    fn contains_value(&self, value: usize) -> bool;
}

impl Membership for PrimeSet {
    fn contains_value(&self, value: usize) -> bool {
        self.contains(value)
    }
}

impl Membership for HashSet<usize> {
    fn contains_value(&self, value: usize) -> bool {
        self.contains(&value)
    }
}

/// A `size × size` grid holding every integer in `1..=size²` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiralGrid {
    size: usize,
    cells: Vec<usize>,
}

impl SpiralGrid {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.size)
    }

    /// Cell values in row-major order.
    pub fn values(&self) -> &[usize] {
        &self.cells
    }

    /// `(row, col)` of the cell holding `value`.
    pub fn position_of(&self, value: usize) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&v| v == value)
            .map(|idx| (idx / self.size, idx % self.size))
    }

    pub fn annotate<S: Membership + ?Sized>(&self, primes: &S) -> AnnotatedSpiralGrid {
        annotate(self, primes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpiralCell {
    pub value: usize,
    pub is_prime: bool,
}

/// A spiral grid with a per-cell primality overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSpiralGrid {
    size: usize,
    cells: Vec<SpiralCell>,
}

impl AnnotatedSpiralGrid {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<SpiralCell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[SpiralCell]> {
        self.cells.chunks(self.size)
    }

    pub fn prime_values(&self) -> BTreeSet<usize> {
        self.cells
            .iter()
            .filter(|cell| cell.is_prime)
            .map(|cell| cell.value)
            .collect()
    }

    pub fn prime_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_prime).count()
    }
}

/// Builds Ulam spirals up to a configurable side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiralLayout {
    max_size: usize,
}

impl Default for SpiralLayout {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SPIRAL_SIZE,
        }
    }
}

impl SpiralLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Walks outwards from `(size / 2, size / 2)`, numbering in-bounds cells from 1.
    ///
    /// The walk turns right, up, left, down and lengthens its stride by one after every
    /// second turn. Steps that leave the grid are taken but do not consume a number, so
    /// for even sizes, where the start cell sits off-centre, the walk keeps circling until
    /// every cell is numbered.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&self, size: usize) -> Result<SpiralGrid, NumericError> {
        if size == 0 {
            return Err(NumericError::InvalidArgument(
                "spiral size must be at least 1".to_string(),
            ));
        }
        if size > self.max_size {
            return Err(NumericError::LimitExceeded {
                quantity: "spiral size",
                value: size,
                limit: self.max_size,
            });
        }

        let target = size * size;
        let mut cells = vec![0; target];
        let center = (size / 2) as isize;
        let (mut x, mut y) = (center, center);
        let mut value = 1;
        cells[cell_index(size, x, y).ok_or(NumericError::Overflow("spiral start"))?] = value;

        let mut direction = 0;
        let mut steps = 1;
        while value < target {
            for _ in 0..2 {
                let (dx, dy) = DIRECTIONS[direction];
                for _ in 0..steps {
                    x += dx;
                    y += dy;
                    if let Some(idx) = cell_index(size, x, y) {
                        value += 1;
                        cells[idx] = value;
                    }
                }
                direction = (direction + 1) % DIRECTIONS.len();
            }
            steps += 1;
        }

        trace!(size, final_stride = steps - 1, "Spiral walk finished.");
        Ok(SpiralGrid { size, cells })
    }
}

fn cell_index(size: usize, x: isize, y: isize) -> Option<usize> {
    let col = usize::try_from(x).ok()?;
    let row = usize::try_from(y).ok()?;
    (col < size && row < size).then(|| row * size + col)
}

pub fn build_spiral(size: usize) -> Result<SpiralGrid, NumericError> {
    SpiralLayout::default().build(size)
}

/// Flags every cell whose value is a member of `primes`.
pub fn annotate<S: Membership + ?Sized>(grid: &SpiralGrid, primes: &S) -> AnnotatedSpiralGrid {
    let cells = grid
        .cells
        .iter()
        .map(|&value| SpiralCell {
            value,
            is_prime: primes.contains_value(value),
        })
        .collect();
    AnnotatedSpiralGrid {
        size: grid.size,
        cells,
    }
}

pub fn build_and_annotate_spiral<S: Membership + ?Sized>(
    size: usize,
    primes: &S,
) -> Result<AnnotatedSpiralGrid, NumericError> {
    Ok(annotate(&build_spiral(size)?, primes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::numbers::sieve::generate_primes;

    fn sorted_values(grid: &SpiralGrid) -> Vec<usize> {
        let mut values = grid.values().to_vec();
        values.sort_unstable();
        values
    }

    #[test]
    fn single_cell_spiral_holds_one() {
        let grid = build_spiral(1).unwrap();
        assert_eq!(grid.values(), &[1]);
    }

    #[test]
    fn three_by_three_spiral_layout() {
        let grid = build_spiral(3).unwrap();
        let rows: Vec<&[usize]> = grid.rows().collect();
        assert_eq!(rows, vec![&[5, 4, 3][..], &[6, 1, 2][..], &[7, 8, 9][..]]);
        assert_eq!(grid.get(1, 1), Some(1));
    }

    #[test]
    fn five_by_five_spiral_layout() {
        let grid = build_spiral(5).unwrap();
        let rows: Vec<&[usize]> = grid.rows().collect();
        assert_eq!(
            rows,
            vec![
                &[17, 16, 15, 14, 13][..],
                &[18, 5, 4, 3, 12][..],
                &[19, 6, 1, 2, 11][..],
                &[20, 7, 8, 9, 10][..],
                &[21, 22, 23, 24, 25][..],
            ]
        );
    }

    #[test]
    fn every_size_covers_all_values_exactly_once() {
        for size in 1..=16 {
            let grid = build_spiral(size).unwrap();
            let expected: Vec<usize> = (1..=size * size).collect();
            assert_eq!(sorted_values(&grid), expected, "size = {}", size);
        }
    }

    #[test]
    fn even_sizes_start_off_centre() {
        let grid = build_spiral(2).unwrap();
        assert_eq!(grid.position_of(1), Some((1, 1)));
        let rows: Vec<&[usize]> = grid.rows().collect();
        assert_eq!(rows, vec![&[3, 2][..], &[4, 1][..]]);

        let grid = build_spiral(4).unwrap();
        assert_eq!(grid.position_of(1), Some((2, 2)));
        assert_eq!(grid.position_of(2), Some((2, 3)));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            build_spiral(0),
            Err(NumericError::InvalidArgument(_))
        ));
    }

    #[test]
    fn size_above_ceiling_is_rejected() {
        let layout = SpiralLayout::new().with_max_size(7);
        assert!(matches!(
            layout.build(8),
            Err(NumericError::LimitExceeded { value: 8, limit: 7, .. })
        ));
        assert!(layout.build(7).is_ok());
    }

    #[test]
    fn get_out_of_bounds_returns_none() {
        let grid = build_spiral(3).unwrap();
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn annotation_flags_exactly_the_member_values() {
        let primes = generate_primes(50).unwrap();
        let annotated = build_and_annotate_spiral(11, &primes).unwrap();

        for row in annotated.rows() {
            for cell in row {
                assert_eq!(cell.is_prime, primes.contains(cell.value));
            }
        }

        let expected: BTreeSet<usize> = (1..=121).filter(|&v| primes.contains(v)).collect();
        assert_eq!(annotated.prime_values(), expected);
        assert_eq!(annotated.prime_count(), 30);
    }

    #[test]
    fn annotation_is_idempotent() {
        let grid = build_spiral(7).unwrap();
        let primes = generate_primes(20).unwrap();
        assert_eq!(annotate(&grid, &primes), annotate(&grid, &primes));
        assert_eq!(grid.annotate(&primes), annotate(&grid, &primes));
    }

    #[test]
    fn empty_set_gives_all_false_overlay() {
        let grid = build_spiral(5).unwrap();
        let annotated = annotate(&grid, &HashSet::<usize>::new());
        assert_eq!(annotated.prime_count(), 0);
        assert!(annotated.prime_values().is_empty());
    }

    #[test]
    fn arbitrary_sets_are_supported() {
        let grid = build_spiral(3).unwrap();
        let set: HashSet<usize> = [1, 9].into_iter().collect();
        let annotated = annotate(&grid, &set);
        assert!(annotated.get(1, 1).unwrap().is_prime);
        assert!(annotated.get(2, 2).unwrap().is_prime);
        assert!(!annotated.get(0, 0).unwrap().is_prime);
    }
}
