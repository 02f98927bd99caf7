//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state for the snake simulation.
//! It has **no dependencies** on the terminal, threads, or wall-clock time, making it:
//!
//! - **Deterministic**: Same seed produces identical fruit placement
//! - **Testable**: Every tick outcome can be reached from a hand-built state
//! - **Portable**: Can be driven by the real game loop, tests, or benchmarks
//!
//! # Module Structure
//!
//! - [`game_state`]: Snake, heading, fruit, and the single-step [`GameState::tick`]
//! - [`fruit`]: Uniform fruit placement over free cells
//!
//! # Game Rules
//!
//! - The snake starts as one segment in the grid center, heading up
//! - Each tick consumes at most one key; reversing into the neck is ignored
//! - Leaving the grid or running into any segment (tail included) ends the game
//! - Eating the fruit grows the snake by one and respawns the fruit on a free cell
//! - Escape ends the game without moving
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, TickOutcome};
//! use tui_snake_types::{Direction, GridSize, InputKey, Position};
//!
//! let grid = GridSize::new(10, 10);
//! let mut game = GameState::from_parts(
//!     grid,
//!     [Position::new(5, 5)],
//!     Direction::Right,
//!     Some(Position::new(6, 5)),
//!     1,
//! )
//! .unwrap();
//!
//! assert_eq!(game.tick(None), TickOutcome::Grew);
//! assert_eq!(game.len(), 2);
//!
//! assert_eq!(game.tick(Some(InputKey::Quit)), TickOutcome::Quit);
//! ```

pub mod fruit;
pub mod game_state;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use fruit::place_fruit;
pub use game_state::{Crash, GameState, StateError, TickOutcome};
