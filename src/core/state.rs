//! Board state machine.
//!
//! A reducer over four transition kinds. Every transition consumes the prior
//! state and produces the next one atomically; a rejected move returns the
//! state unchanged. The closed action enum keeps the "unrecognized
//! transition" failure of looser renditions unrepresentable.

use crate::core::board::Board;
use crate::core::collision::has_collision;
use crate::core::shapes::{base_shape, Shape};
use crate::types::{MoveIntent, PieceKind, SPAWN_COLUMN, SPAWN_ROW};

#[derive(Debug, Clone)]
pub enum BoardAction {
    /// Reset to an empty grid and spawn `kind` at the anchor.
    Start { kind: PieceKind },
    /// Advance the dropping piece one row. The game loop consults the
    /// collision oracle before issuing this; no check happens here.
    Drop,
    /// Rotate and/or shift the dropping piece. An obstructed candidate is
    /// silently rejected; there is no wall kicking.
    Move(MoveIntent),
    /// Install the post-lock board (already cleared, possibly short) and
    /// spawn the next piece. Clearing and spawn-legality are the game
    /// loop's responsibility, computed before this is dispatched.
    Commit { board: Board, kind: PieceKind },
}

/// The grid plus the active dropping piece. The piece is replaced wholesale
/// on Start/Commit and mutated in place on Drop/Move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
    dropping_row: i8,
    dropping_column: i8,
    dropping_kind: PieceKind,
    dropping_shape: Shape,
}

impl BoardState {
    /// Placeholder state before the first Start.
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            dropping_row: 0,
            dropping_column: 0,
            dropping_kind: PieceKind::I,
            dropping_shape: base_shape(PieceKind::I),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dropping_row(&self) -> i8 {
        self.dropping_row
    }

    pub fn dropping_column(&self) -> i8 {
        self.dropping_column
    }

    pub fn dropping_kind(&self) -> PieceKind {
        self.dropping_kind
    }

    pub fn dropping_shape(&self) -> &Shape {
        &self.dropping_shape
    }

    pub fn dispatch(&mut self, action: BoardAction) {
        match action {
            BoardAction::Start { kind } => {
                *self = Self {
                    board: Board::empty(),
                    dropping_row: SPAWN_ROW,
                    dropping_column: SPAWN_COLUMN,
                    dropping_kind: kind,
                    dropping_shape: base_shape(kind),
                };
            }
            BoardAction::Drop => {
                self.dropping_row += 1;
            }
            BoardAction::Move(intent) => {
                let candidate_shape = if intent.rotate {
                    self.dropping_shape.rotated_cw()
                } else {
                    self.dropping_shape
                };
                let candidate_column = self.dropping_column + intent.dx();
                if !has_collision(
                    &self.board,
                    &candidate_shape,
                    self.dropping_row,
                    candidate_column,
                ) {
                    self.dropping_column = candidate_column;
                    self.dropping_shape = candidate_shape;
                }
            }
            BoardAction::Commit { mut board, kind } => {
                board.restore_height();
                *self = Self {
                    board,
                    dropping_row: SPAWN_ROW,
                    dropping_column: SPAWN_COLUMN,
                    dropping_kind: kind,
                    dropping_shape: base_shape(kind),
                };
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
