//! Terminal input module (engine-facing).
//!
//! This module maps `crossterm` events into [`crate::types::InputKey`] and runs them
//! through a background reader thread into a shared FIFO queue. The game loop only ever
//! sees the queue, so it never blocks on the terminal.

pub mod map;
pub mod queue;
pub mod reader;

pub use tui_snake_types as types;

pub use map::{accept_event, map_key_event};
pub use queue::{InputQueue, RunningFlag};
pub use reader::{EventSource, InputReader, TerminalEvents};
