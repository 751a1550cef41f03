use super::NumericError;
use nalgebra::{DMatrix, Point2, distance};

pub const MAX_TREE_DEPTH: usize = 16;
pub const MAX_RADIAL_SIZE: usize = 101;
pub const MAX_IDENTITY_SIZE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialCell {
    /// Within one unit of the outer circle.
    Ring,
    Interior,
    Empty,
}

/// Classifies each cell of a `size × size` square by its distance to the centre cell.
pub fn radial_symmetry(size: usize) -> Vec<Vec<RadialCell>> {
    let radius = (size / 2) as f64;
    let center = Point2::new(radius, radius);

    (0..size)
        .map(|i| {
            (0..size)
                .map(|j| {
                    let d = distance(&Point2::new(i as f64, j as f64), &center);
                    if (d - radius).abs() < 1.0 {
                        RadialCell::Ring
                    } else if d < radius {
                        RadialCell::Interior
                    } else {
                        RadialCell::Empty
                    }
                })
                .collect()
        })
        .collect()
}

pub fn identity_matrix(size: usize) -> DMatrix<u8> {
    DMatrix::identity(size, size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLevel {
    pub indent: usize,
    pub branches: usize,
}

/// Level layout of a Pythagoras tree: level `d` has `2^d` branches indented by `2 (depth - d)`.
pub fn pythagoras_tree(depth: usize) -> Result<Vec<TreeLevel>, NumericError> {
    if depth > MAX_TREE_DEPTH {
        return Err(NumericError::LimitExceeded {
            quantity: "tree depth",
            value: depth,
            limit: MAX_TREE_DEPTH,
        });
    }
    Ok((0..depth)
        .map(|d| TreeLevel {
            indent: (depth - d) * 2,
            branches: 1 << d,
        })
        .collect())
}
