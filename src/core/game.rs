//! Game loop controller.
//!
//! Owns the authoritative clock speed, score, upcoming queue and play
//! status, and drives the board state machine through its transitions. The
//! controller decides when a piece locks; the state machine never checks
//! collisions on Drop.

use arrayvec::ArrayVec;

use crate::core::collision::has_collision;
use crate::core::rng::PieceRng;
use crate::core::scoring::line_clear_points;
use crate::core::shapes::base_shape;
use crate::core::snapshot::GameSnapshot;
use crate::core::state::{BoardAction, BoardState};
use crate::types::{
    MoveIntent, PieceKind, TickSpeed, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_COLUMN, SPAWN_ROW,
    UPCOMING_LEN,
};

pub struct Game {
    state: BoardState,
    rng: PieceRng,
    upcoming: ArrayVec<PieceKind, UPCOMING_LEN>,
    score: u32,
    is_playing: bool,
    is_committing: bool,
    tick_speed: Option<TickSpeed>,
}

impl Game {
    pub fn new(seed: u32) -> Self {
        Self {
            state: BoardState::new(),
            rng: PieceRng::new(seed),
            upcoming: ArrayVec::new(),
            score: 0,
            is_playing: false,
            is_committing: false,
            tick_speed: None,
        }
    }

    /// Reset and begin a new game: seed the upcoming queue, zero the score,
    /// start the clock at Normal and spawn a fresh piece.
    pub fn start_game(&mut self) {
        self.upcoming.clear();
        for _ in 0..UPCOMING_LEN {
            self.upcoming.push(self.rng.draw());
        }
        self.score = 0;
        self.is_playing = true;
        self.is_committing = false;
        self.tick_speed = Some(TickSpeed::Normal);
        let first = self.rng.draw();
        self.state.dispatch(BoardAction::Start { kind: first });
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_speed(&self) -> Option<TickSpeed> {
        self.tick_speed
    }

    /// Current clock period, or None while paused/stopped.
    pub fn tick_period_ms(&self) -> Option<u64> {
        self.tick_speed.map(TickSpeed::period_ms)
    }

    /// One game-clock tick: finish a pending commit, or advance the piece,
    /// or enter the pre-lock grace period.
    pub fn tick(&mut self) {
        if !self.is_playing {
            return;
        }
        if self.is_committing {
            self.commit_position();
            return;
        }
        if has_collision(
            self.state.board(),
            self.state.dropping_shape(),
            self.state.dropping_row() + 1,
            self.state.dropping_column(),
        ) {
            self.tick_speed = Some(TickSpeed::Sliding);
            self.is_committing = true;
        } else {
            self.state.dispatch(BoardAction::Drop);
        }
    }

    /// Lock the piece: stamp, clear, rotate the queue, test the next spawn
    /// and hand the rebuilt board to the state machine.
    fn commit_position(&mut self) {
        // The player may have slid the piece free during the grace period.
        if !has_collision(
            self.state.board(),
            self.state.dropping_shape(),
            self.state.dropping_row() + 1,
            self.state.dropping_column(),
        ) {
            self.is_committing = false;
            self.tick_speed = Some(TickSpeed::Normal);
            return;
        }

        let mut locked = self.state.board().clone();
        locked.stamp(
            self.state.dropping_shape(),
            self.state.dropping_kind(),
            self.state.dropping_row(),
            self.state.dropping_column(),
        );
        let cleared = locked.clear_full_rows();

        let next_kind = self
            .upcoming
            .pop()
            .expect("upcoming queue is seeded on start and refilled per commit");
        self.upcoming.insert(0, self.rng.draw());

        // The spawn test runs against the stored board as it is right now,
        // before the commit below installs the cleared one. A stack that
        // only became blocking through this very piece ends the game one
        // commit later.
        let spawn_blocked = has_collision(
            self.state.board(),
            &base_shape(next_kind),
            SPAWN_ROW,
            SPAWN_COLUMN,
        );
        if spawn_blocked {
            self.is_playing = false;
            self.tick_speed = None;
        } else {
            self.tick_speed = Some(TickSpeed::Normal);
        }

        self.score += line_clear_points(cleared);
        self.state.dispatch(BoardAction::Commit {
            board: locked,
            kind: next_kind,
        });
        self.is_committing = false;
    }

    /// Apply a movement intent from the input layer. Illegal candidates are
    /// rejected inside the state machine; nothing to report either way.
    pub fn apply_move(&mut self, intent: MoveIntent) {
        if !self.is_playing {
            return;
        }
        self.state.dispatch(BoardAction::Move(intent));
    }

    /// Soft-drop speed while the down key is held; Normal on release.
    pub fn set_fast_drop(&mut self, fast: bool) {
        if !self.is_playing {
            return;
        }
        self.tick_speed = Some(if fast {
            TickSpeed::Fast
        } else {
            TickSpeed::Normal
        });
    }

    /// Fresh snapshot for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut rendered = self.state.board().clone();
        if self.is_playing {
            rendered.stamp(
                self.state.dropping_shape(),
                self.state.dropping_kind(),
                self.state.dropping_row(),
                self.state.dropping_column(),
            );
        }

        let mut board = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
        for (index, row) in rendered.rows().iter().enumerate() {
            board[index] = *row;
        }

        GameSnapshot {
            board,
            is_playing: self.is_playing,
            score: self.score,
            upcoming: self.upcoming.clone(),
        }
    }
}
