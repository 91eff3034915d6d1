//! Piece catalog and rotation.
//!
//! Each kind has one canonical rotation-0 shape expressed in a fixed square
//! bounding box (4x4, 3x3 or 2x2). Rotation is a plain clockwise quarter-turn
//! into a freshly built matrix; there are no kick tables in this ruleset.

use crate::types::PieceKind;

/// Largest bounding-box edge across the catalog.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupancy matrix of a piece in its current rotation.
///
/// Cells outside the active `size x size` box are always unoccupied, so
/// consumers may iterate the full backing array without extra bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: usize,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    fn from_rows<const N: usize>(rows: [[bool; N]; N]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            cells[r][..N].copy_from_slice(row);
        }
        Self { size: N, cells }
    }

    /// Bounding-box edge length (2, 3 or 4).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_set(&self, row: usize, column: usize) -> bool {
        self.cells[row][column]
    }

    /// Rows with at least one occupied cell, re-indexed compactly from zero.
    ///
    /// A shape row with no occupied cells never contributes to collision or
    /// stamping, so a rotated bar whose occupied row sits mid-box is treated
    /// as starting at the piece's anchor row.
    pub fn occupied_rows(&self) -> impl Iterator<Item = (usize, &[bool; MAX_SHAPE_SIZE])> + '_ {
        self.cells[..self.size]
            .iter()
            .filter(|row| row.iter().any(|&set| set))
            .enumerate()
    }

    /// Clockwise quarter-turn. The receiver is never mutated.
    pub fn rotated_cw(&self) -> Shape {
        let n = self.size;
        let mut rotated = Shape {
            size: n,
            cells: [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
        };
        for row in 0..n {
            for column in 0..n {
                rotated.cells[column][n - 1 - row] = self.cells[row][column];
            }
        }
        rotated
    }
}

/// Canonical rotation-0 shape for a kind.
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows([
            [false, true, false, false],
            [false, true, false, false],
            [false, true, false, false],
            [false, true, false, false],
        ]),
        PieceKind::J => Shape::from_rows([
            [true, true, false],
            [true, false, false],
            [true, false, false],
        ]),
        PieceKind::L => Shape::from_rows([
            [true, false, false],
            [true, false, false],
            [true, true, false],
        ]),
        PieceKind::O => Shape::from_rows([
            [true, true],
            [true, true],
        ]),
        PieceKind::S => Shape::from_rows([
            [true, false, false],
            [true, true, false],
            [false, true, false],
        ]),
        PieceKind::T => Shape::from_rows([
            [true, false, false],
            [true, true, false],
            [true, false, false],
        ]),
        PieceKind::Z => Shape::from_rows([
            [false, true, false],
            [true, true, false],
            [true, false, false],
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let shape = base_shape(kind);
            let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(shape, back, "kind {:?}", kind);
        }
    }

    #[test]
    fn test_every_base_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            let shape = base_shape(kind);
            let count: usize = shape
                .occupied_rows()
                .map(|(_, row)| row.iter().filter(|&&set| set).count())
                .sum();
            assert_eq!(count, 4, "kind {:?}", kind);
        }
    }

    #[test]
    fn test_rotated_bar_compacts_to_single_row() {
        // Vertical I turns into a horizontal bar whose occupied row sits in
        // the middle of the box; the compacted view starts at index 0.
        let flat = base_shape(PieceKind::I).rotated_cw();
        let rows: Vec<_> = flat.occupied_rows().collect();
        assert_eq!(rows.len(), 1);
        let (index, row) = rows[0];
        assert_eq!(index, 0);
        assert_eq!(&row[..], &[true, true, true, true]);
    }

    #[test]
    fn test_o_rotation_is_a_no_op() {
        let shape = base_shape(PieceKind::O);
        assert_eq!(shape.rotated_cw(), shape);
    }

    #[test]
    fn test_rotation_turns_left_column_into_top_row() {
        // J occupies its left column plus the top-middle cell; one clockwise
        // turn puts the column across the top row.
        let rotated = base_shape(PieceKind::J).rotated_cw();
        assert!(rotated.is_set(0, 0));
        assert!(rotated.is_set(0, 1));
        assert!(rotated.is_set(0, 2));
        assert!(rotated.is_set(1, 2));
    }
}
