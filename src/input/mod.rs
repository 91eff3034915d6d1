//! Input module - keyboard edges in, movement signals out.

pub mod handler;
pub mod map;

pub use handler::{InputHandler, InputSignal};
pub use map::{is_start, logical_key, should_quit, LogicalKey};
