//! Core module - pure game logic with no terminal or timing dependencies.

pub mod board;
pub mod collision;
pub mod game;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use board::Board;
pub use collision::has_collision;
pub use game::Game;
pub use shapes::{base_shape, Shape};
pub use snapshot::GameSnapshot;
pub use state::{BoardAction, BoardState};
