//! Input debouncer: key edges in, level-triggered movement out.
//!
//! Holding a directional key yields an immediate move plus a steady repeat
//! every `MOVE_REPEAT_MS`; releasing it stops the repeat. Host auto-repeat
//! must be filtered out by the caller (crossterm reports it as
//! `KeyEventKind::Repeat`) so only genuine edges reach this type.

use arrayvec::ArrayVec;

use crate::input::map::LogicalKey;
use crate::types::{MoveIntent, MOVE_REPEAT_MS};

/// Signals handed to the game loop controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    Move(MoveIntent),
    /// Down key held (true) or released (false).
    FastDrop(bool),
}

#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    pressing_left: bool,
    pressing_right: bool,
    repeat_timer_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Genuine first-press edge for a logical key.
    pub fn key_down(&mut self, key: LogicalKey) -> Option<InputSignal> {
        match key {
            LogicalKey::Rotate => Some(InputSignal::Move(MoveIntent::rotate())),
            LogicalKey::SoftDrop => Some(InputSignal::FastDrop(true)),
            LogicalKey::Left => {
                self.pressing_left = true;
                Some(self.restart_repeat())
            }
            LogicalKey::Right => {
                self.pressing_right = true;
                Some(self.restart_repeat())
            }
        }
    }

    /// Genuine release edge for a logical key.
    pub fn key_up(&mut self, key: LogicalKey) -> Option<InputSignal> {
        match key {
            LogicalKey::Rotate => None,
            LogicalKey::SoftDrop => Some(InputSignal::FastDrop(false)),
            LogicalKey::Left => {
                self.pressing_left = false;
                self.after_release()
            }
            LogicalKey::Right => {
                self.pressing_right = false;
                self.after_release()
            }
        }
    }

    fn restart_repeat(&mut self) -> InputSignal {
        self.repeat_timer_ms = 0;
        InputSignal::Move(MoveIntent::shift(self.pressing_left, self.pressing_right))
    }

    /// Releasing one of two held keys re-issues an immediate intent for the
    /// surviving direction; a full release just stops the repeat.
    fn after_release(&mut self) -> Option<InputSignal> {
        if self.pressing_left || self.pressing_right {
            Some(self.restart_repeat())
        } else {
            self.repeat_timer_ms = 0;
            None
        }
    }

    /// Advance the repeat clock, emitting one intent per elapsed repeat
    /// period while a direction is held.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<MoveIntent, 4> {
        let mut intents = ArrayVec::new();
        if !self.pressing_left && !self.pressing_right {
            self.repeat_timer_ms = 0;
            return intents;
        }

        self.repeat_timer_ms += elapsed_ms;
        while self.repeat_timer_ms >= MOVE_REPEAT_MS {
            self.repeat_timer_ms -= MOVE_REPEAT_MS;
            let _ = intents.try_push(MoveIntent::shift(self.pressing_left, self.pressing_right));
        }
        intents
    }

    /// Drop all held state, e.g. when play stops.
    pub fn reset(&mut self) {
        self.pressing_left = false;
        self.pressing_right = false;
        self.repeat_timer_ms = 0;
    }
}
