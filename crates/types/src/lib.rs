//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game state, input reader, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The playfield is derived once from the terminal size at startup:
//!
//! - Each dimension is [`MAX_GRID_DIM`] when the terminal is larger than that,
//!   otherwise the terminal dimension minus one.
//! - Coordinates are zero-based: `0 <= x < width`, `0 <= y < height`.
//! - `y` grows downwards, matching terminal rows.
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 250 | Fixed interval between snake steps |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GridSize, InputKey, Position};
//!
//! let grid = GridSize::new(10, 10);
//! let head = grid.center();
//! assert_eq!(head, Position::new(5, 5));
//!
//! // Step one cell to the right
//! let next = head.step(Direction::Right);
//! assert_eq!(next, Position::new(6, 5));
//! assert!(grid.contains(next));
//!
//! // Reversal is never allowed
//! assert!(Direction::Left.is_opposite(Direction::Right));
//!
//! // Only the four arrows carry a direction
//! assert_eq!(InputKey::Up.direction(), Some(Direction::Up));
//! assert_eq!(InputKey::Quit.direction(), None);
//! ```

/// Fixed interval between game ticks in milliseconds (4 steps per second)
pub const TICK_MS: u64 = 250;

/// Largest grid dimension, in cells, on either axis
pub const MAX_GRID_DIM: u16 = 20;

/// Snake length at the start of a game
pub const INITIAL_SNAKE_LEN: usize = 1;

/// Glyph drawn for the fruit
pub const FRUIT_CHAR: char = '%';

/// Glyph drawn for the snake head
pub const HEAD_CHAR: char = '@';

/// Glyph drawn for body segments behind the head
pub const BODY_CHAR: char = '#';

/// Glyph drawn for empty cells
pub const EMPTY_CHAR: char = '.';

/// Message shown once the game has ended
pub const CONTINUE_PROMPT: &str = "Press any key to continue...";


/// A cell coordinate on the grid
///
/// Coordinates are signed so a head that steps past the left or top edge is still
/// representable and can be rejected by [`GridSize::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit away along `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Heading of the snake
///
/// `Up` and `Down` move along the y axis (rows), `Left` and `Right` along x (columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset `(dx, dy)` for one step
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Whether turning from `self` to `other` would reverse into the neck
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Playfield dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Create a grid. Zero dimensions are raised to one.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Derive the grid from a terminal of `cols` x `rows` characters
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::GridSize;
    ///
    /// assert_eq!(GridSize::from_terminal(120, 40), GridSize::new(20, 20));
    /// assert_eq!(GridSize::from_terminal(15, 10), GridSize::new(14, 9));
    /// ```
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self::new(clamp_dim(cols), clamp_dim(rows))
    }

    /// Check whether `pos` is inside `[0, width) x [0, height)`
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width as i32 && pos.y < self.height as i32
    }

    pub fn center(&self) -> Position {
        Position::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every cell of the grid in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| Position::new(x, y)))
    }
}

fn clamp_dim(terminal_dim: u16) -> u16 {
    if terminal_dim > MAX_GRID_DIM {
        MAX_GRID_DIM
    } else {
        terminal_dim.saturating_sub(1)
    }
}

/// Keys accepted by the input reader
///
/// Everything else the terminal reports is dropped before it reaches the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    /// Escape: end the game immediately
    Quit,
}

impl InputKey {
    /// The heading this key asks for, if it is an arrow
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputKey::Up => Some(Direction::Up),
            InputKey::Down => Some(Direction::Down),
            InputKey::Left => Some(Direction::Left),
            InputKey::Right => Some(Direction::Right),
            InputKey::Quit => None,
        }
    }

    pub fn is_quit(self) -> bool {
        matches!(self, InputKey::Quit)
    }
}
