//! Terminal presentation layer: a thin view over the engine's snapshots.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::{Frame, GameView, Glyph};
