//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Game state is drawn into
//! a framebuffer by [`GameView`], which [`TerminalRenderer`] flushes to the terminal through
//! crossterm. [`TerminalScreen`] bundles the two behind the engine's `Renderer` trait.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the drawing itself pure so it can be asserted on cell by cell
//! - Only write the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::TerminalScreen;
