//! GameView: maps a `GameSnapshot` into a frame of styled glyphs.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::snapshot::GameSnapshot;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Board cell width in terminal columns (compensates for glyph aspect ratio).
const CELL_W: usize = 2;

/// Sidebar width in terminal columns.
const SIDEBAR_W: usize = 20;

/// One styled terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// Fixed-size character frame the renderer flushes verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Glyph {
        self.glyphs[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if x < self.width && y < self.height {
            self.glyphs[y as usize * self.width as usize + x as usize] = glyph;
        }
    }

    fn put_text(&mut self, x: u16, y: u16, text: &str, fg: Color) {
        for (offset, ch) in text.chars().enumerate() {
            self.set(x + offset as u16, y, Glyph { ch, fg });
        }
    }
}

/// Display color for a piece kind.
pub fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::DarkYellow,
        PieceKind::O => Color::Yellow,
        PieceKind::S => Color::Green,
        PieceKind::T => Color::Magenta,
        PieceKind::Z => Color::Red,
    }
}

/// Renders snapshots into frames: a bordered well plus a score/next sidebar.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    pub fn frame_size(&self) -> (u16, u16) {
        let width = BOARD_WIDTH * CELL_W + 2 + 1 + SIDEBAR_W;
        let height = BOARD_HEIGHT + 2;
        (width as u16, height as u16)
    }

    pub fn render(&self, snapshot: &GameSnapshot) -> Frame {
        let (width, height) = self.frame_size();
        let mut frame = Frame::new(width, height);

        self.draw_well_border(&mut frame);
        self.draw_cells(&mut frame, snapshot);
        self.draw_sidebar(&mut frame, snapshot);

        frame
    }

    fn draw_well_border(&self, frame: &mut Frame) {
        let right = (BOARD_WIDTH * CELL_W + 1) as u16;
        let bottom = (BOARD_HEIGHT + 1) as u16;
        let border = Color::Grey;

        for x in 1..right {
            frame.set(x, 0, Glyph { ch: '─', fg: border });
            frame.set(x, bottom, Glyph { ch: '─', fg: border });
        }
        for y in 1..bottom {
            frame.set(0, y, Glyph { ch: '│', fg: border });
            frame.set(right, y, Glyph { ch: '│', fg: border });
        }
        frame.set(0, 0, Glyph { ch: '┌', fg: border });
        frame.set(right, 0, Glyph { ch: '┐', fg: border });
        frame.set(0, bottom, Glyph { ch: '└', fg: border });
        frame.set(right, bottom, Glyph { ch: '┘', fg: border });
    }

    fn draw_cells(&self, frame: &mut Frame, snapshot: &GameSnapshot) {
        for (row, cells) in snapshot.board.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                let x = (1 + column * CELL_W) as u16;
                let y = (1 + row) as u16;
                match cell {
                    Some(kind) => {
                        let fg = kind_color(*kind);
                        frame.set(x, y, Glyph { ch: '█', fg });
                        frame.set(x + 1, y, Glyph { ch: '█', fg });
                    }
                    None => {
                        frame.set(
                            x,
                            y,
                            Glyph {
                                ch: '·',
                                fg: Color::DarkGrey,
                            },
                        );
                    }
                }
            }
        }
    }

    fn draw_sidebar(&self, frame: &mut Frame, snapshot: &GameSnapshot) {
        let x = (BOARD_WIDTH * CELL_W + 3) as u16;

        frame.put_text(x, 1, &format!("SCORE {}", snapshot.score), Color::White);

        frame.put_text(x, 3, "NEXT", Color::White);
        // Next-to-play first: the queue stores newest first.
        for (slot, kind) in snapshot.upcoming.iter().rev().enumerate() {
            frame.put_text(
                x + 5 + (slot * 2) as u16,
                3,
                kind.as_str(),
                kind_color(*kind),
            );
        }

        if !snapshot.is_playing {
            if snapshot.score > 0 || snapshot.filled_cells() > 0 {
                frame.put_text(x, 5, "GAME OVER", Color::Red);
            }
            frame.put_text(x, 7, "enter: play", Color::Grey);
            frame.put_text(x, 8, "q: quit", Color::Grey);
        }
    }
}
