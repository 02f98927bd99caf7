//! Game loop module.
//!
//! Ties the pure game state to the outside world: keys come in through the shared
//! [`InputQueue`](crate::input::InputQueue), frames go out through a [`Renderer`], and a
//! [`TickScheduler`] decides when the next step happens.
//!
//! # Timing
//!
//! [`FixedIntervalScheduler`] sleeps a fixed quantum ([`TICK_MS`](crate::types::TICK_MS))
//! between checks and only ticks once that much time has passed since the last successful
//! tick. Nothing in the loop blocks except that sleep.

pub mod game_loop;
pub mod scheduler;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_types as types;

pub use game_loop::{GameEnd, GameLoop, Renderer};
pub use scheduler::{FixedIntervalScheduler, TickScheduler};
