//! Collision oracle - pure overlap/bounds predicate.
//!
//! Consulted by both the board state machine (move candidates) and the game
//! loop (advance and spawn tests) before any transition is committed.

use crate::core::board::Board;
use crate::core::shapes::Shape;
use crate::types::BOARD_WIDTH;

/// Would `shape`, anchored at (`row`, `column`), overlap a filled cell or
/// leave the bounds?
///
/// Checks, for every occupied sub-cell: the floor (target row at or below
/// the board's bottom edge), both side walls, and the stack. Fully-empty
/// shape rows are skipped, so a shape may be probed with parts of its
/// bounding box hanging past the floor without a false positive.
///
/// Rows above the top edge are not guarded: pieces anchor at row 0 and only
/// ever move down, so `row` is never negative in practice.
pub fn has_collision(board: &Board, shape: &Shape, row: i8, column: i8) -> bool {
    for (dr, shape_row) in shape.occupied_rows() {
        for (dc, &set) in shape_row.iter().enumerate() {
            if !set {
                continue;
            }
            let target_row = row as usize + dr;
            if target_row >= board.height() {
                return true;
            }
            let target_column = column + dc as i8;
            if target_column < 0 || target_column >= BOARD_WIDTH as i8 {
                return true;
            }
            if board.get(target_row, target_column as usize).is_some() {
                return true;
            }
        }
    }
    false
}
