//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! One grid cell is one terminal character: column `x`, row `y`, anchored at the top-left
//! corner of the screen.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Position, BODY_CHAR, EMPTY_CHAR, FRUIT_CHAR, HEAD_CHAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub empty: CellStyle,
    pub fruit: CellStyle,
    pub head: CellStyle,
    pub body: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: CellStyle::fg(Rgb::new(90, 90, 100)).dim(),
            fruit: CellStyle::fg(Rgb::new(220, 80, 80)).bold(),
            head: CellStyle::fg(Rgb::new(240, 220, 80)).bold(),
            body: CellStyle::fg(Rgb::new(100, 220, 120)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameView {
    palette: Palette,
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// The framebuffer is resized to the grid, so callers can keep reusing one across frames.
    pub fn render_into(&self, state: &GameState, fb: &mut FrameBuffer) {
        let grid = state.grid();
        fb.resize(grid.width, grid.height);
        fb.clear(Cell::new(EMPTY_CHAR, self.palette.empty));

        if let Some(fruit) = state.fruit() {
            put(fb, fruit, FRUIT_CHAR, self.palette.fruit);
        }

        // Head last so it is never hidden.
        for &seg in state.snake().iter().skip(1) {
            put(fb, seg, BODY_CHAR, self.palette.body);
        }
        put(fb, state.head(), HEAD_CHAR, self.palette.head);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState) -> FrameBuffer {
        let grid = state.grid();
        let mut fb = FrameBuffer::new(grid.width, grid.height);
        self.render_into(state, &mut fb);
        fb
    }
}

fn put(fb: &mut FrameBuffer, pos: Position, ch: char, style: CellStyle) {
    if pos.x < 0 || pos.y < 0 {
        return;
    }
    fb.put_char(pos.x as u16, pos.y as u16, ch, style);
}
