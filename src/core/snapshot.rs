//! Read-only game snapshot handed to the presentation layer.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, UPCOMING_LEN};

/// Everything a renderer needs, recomputed after every accepted transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Committed board with the dropping piece stamped on top. The stored
    /// board never contains the in-flight piece; this copy does.
    pub board: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
    pub is_playing: bool,
    pub score: u32,
    /// Upcoming kinds, newest first; the last entry is played next.
    pub upcoming: ArrayVec<PieceKind, UPCOMING_LEN>,
}

impl GameSnapshot {
    /// Count of non-empty cells, handy for asserting on board contents.
    pub fn filled_cells(&self) -> usize {
        self.board
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }
}
