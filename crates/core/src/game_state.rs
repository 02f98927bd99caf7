//! Game state module - manages the complete game state
//!
//! This module owns the snake, its heading, the fruit and the RNG that places it.
//! [`GameState::tick`] advances the world by exactly one step; it never blocks and never
//! touches the terminal. The caller decides when a tick is due and which queued key (if any)
//! to feed it.

use std::collections::VecDeque;
use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::fruit::place_fruit;
use crate::types::*;

/// Why a tick ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    /// The head left `[0, width) x [0, height)`
    OutOfBounds,
    /// The head ran into a segment of the snake
    SelfCollision,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake advanced and dropped its tail
    Moved,
    /// The snake ate the fruit and is one segment longer
    Grew,
    /// The game is over; nothing was mutated
    Crashed(Crash),
    /// The quit key was consumed; nothing was mutated
    Quit,
    /// The snake grew into the last free cell
    Won,
}

impl TickOutcome {
    /// Whether the game must stop after this tick
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TickOutcome::Crashed(_) | TickOutcome::Quit | TickOutcome::Won
        )
    }
}

/// Rejected hand-built state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    EmptySnake,
    SegmentOutOfBounds(Position),
    DuplicateSegment(Position),
    FruitOutOfBounds(Position),
    FruitOnSnake(Position),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::EmptySnake => write!(f, "snake must have at least one segment"),
            StateError::SegmentOutOfBounds(p) => {
                write!(f, "snake segment ({}, {}) is outside the grid", p.x, p.y)
            }
            StateError::DuplicateSegment(p) => {
                write!(f, "snake occupies ({}, {}) more than once", p.x, p.y)
            }
            StateError::FruitOutOfBounds(p) => {
                write!(f, "fruit ({}, {}) is outside the grid", p.x, p.y)
            }
            StateError::FruitOnSnake(p) => {
                write!(f, "fruit ({}, {}) overlaps the snake", p.x, p.y)
            }
        }
    }
}

impl std::error::Error for StateError {}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: GridSize,
    /// Head at the front, tail at the back.
    snake: VecDeque<Position>,
    direction: Direction,
    /// `None` only when no free cell is left.
    fruit: Option<Position>,
    rng: StdRng,
}

impl GameState {
    /// Start a new game: the snake's head in the center heading up, fruit placed at random.
    ///
    /// The body trails straight behind the head, [`INITIAL_SNAKE_LEN`] segments long or as
    /// many as fit before the edge.
    pub fn new(grid: GridSize, seed: u64) -> Self {
        let direction = Direction::Up;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut snake = VecDeque::with_capacity(grid.cell_count());
        let mut segment = grid.center();
        while snake.len() < INITIAL_SNAKE_LEN && grid.contains(segment) {
            snake.push_back(segment);
            segment = segment.step(direction.opposite());
        }
        let fruit = place_fruit(grid, &snake, &mut rng);

        Self {
            grid,
            snake,
            direction,
            fruit,
            rng,
        }
    }

    /// Build an arbitrary state, head first.
    ///
    /// Used by tests and benchmarks to set up specific situations.
    pub fn from_parts(
        grid: GridSize,
        snake: impl IntoIterator<Item = Position>,
        direction: Direction,
        fruit: Option<Position>,
        seed: u64,
    ) -> Result<Self, StateError> {
        let snake: VecDeque<Position> = snake.into_iter().collect();
        if snake.is_empty() {
            return Err(StateError::EmptySnake);
        }
        for (i, &seg) in snake.iter().enumerate() {
            if !grid.contains(seg) {
                return Err(StateError::SegmentOutOfBounds(seg));
            }
            if snake.iter().skip(i + 1).any(|&other| other == seg) {
                return Err(StateError::DuplicateSegment(seg));
            }
        }
        if let Some(f) = fruit {
            if !grid.contains(f) {
                return Err(StateError::FruitOutOfBounds(f));
            }
            if snake.contains(&f) {
                return Err(StateError::FruitOnSnake(f));
            }
        }

        Ok(Self {
            grid,
            snake,
            direction,
            fruit,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn fruit(&self) -> Option<Position> {
        self.fruit
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    /// Segments from head to tail
    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Always false: a snake keeps at least its head.
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }

    /// Apply a direction change unless it would reverse the snake.
    ///
    /// Returns true if the heading changed.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if dir == self.direction || dir.is_opposite(self.direction) {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Advance the world by one step.
    ///
    /// `key` is the single input popped for this tick, if any. `Quit` and `Crashed` leave the
    /// snake and fruit untouched.
    pub fn tick(&mut self, key: Option<InputKey>) -> TickOutcome {
        if let Some(key) = key {
            if key.is_quit() {
                return TickOutcome::Quit;
            }
            if let Some(dir) = key.direction() {
                self.steer(dir);
            }
        }

        let new_head = self.head().step(self.direction);

        if !self.grid.contains(new_head) {
            return TickOutcome::Crashed(Crash::OutOfBounds);
        }
        // The tail still counts: it has not moved out of the way yet.
        if self.snake.contains(&new_head) {
            return TickOutcome::Crashed(Crash::SelfCollision);
        }

        self.snake.push_front(new_head);

        if self.fruit != Some(new_head) {
            self.snake.pop_back();
            return TickOutcome::Moved;
        }

        match place_fruit(self.grid, &self.snake, &mut self.rng) {
            Some(next) => {
                self.fruit = Some(next);
                TickOutcome::Grew
            }
            None => {
                self.fruit = None;
                TickOutcome::Won
            }
        }
    }
}
