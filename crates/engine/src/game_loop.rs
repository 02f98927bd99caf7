//! Fixed-tick game loop.
//!
//! Each due tick pops at most one key from the shared queue and feeds it to
//! [`GameState::tick`]. Keys beyond the first stay queued for later ticks. A terminal
//! outcome clears the running flag, which is also how the input reader learns to stop.

use anyhow::Result;
use log::{debug, info};

use crate::core::{GameState, TickOutcome};
use crate::input::{InputQueue, RunningFlag};
use crate::scheduler::TickScheduler;
use crate::types::CONTINUE_PROMPT;

/// Draws the world for the loop.
pub trait Renderer {
    /// Paint the current state.
    fn render(&mut self, state: &GameState) -> Result<()>;

    /// Replace the board with a single line of text.
    fn show_prompt(&mut self, text: &str) -> Result<()>;
}

/// How [`GameLoop::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// A tick produced a terminal outcome.
    Finished(TickOutcome),
    /// The running flag was cleared by someone else (the input reader on a read error).
    Interrupted,
}

pub struct GameLoop<S> {
    queue: InputQueue,
    running: RunningFlag,
    scheduler: S,
}

impl<S: TickScheduler> GameLoop<S> {
    pub fn new(queue: InputQueue, running: RunningFlag, scheduler: S) -> Self {
        Self {
            queue,
            running,
            scheduler,
        }
    }

    /// Run one tick if the scheduler says it is due.
    ///
    /// Returns the outcome, or `None` when no tick was due.
    pub fn step<R: Renderer>(
        &mut self,
        state: &mut GameState,
        renderer: &mut R,
    ) -> Result<Option<TickOutcome>> {
        if !self.scheduler.is_due() {
            return Ok(None);
        }

        let key = self.queue.try_pop();
        let outcome = state.tick(key);
        debug!(
            "tick: key={:?} outcome={:?} head={:?} len={}",
            key,
            outcome,
            state.head(),
            state.len()
        );

        if outcome.is_terminal() {
            self.running.stop();
            return Ok(Some(outcome));
        }

        renderer.render(state)?;
        self.scheduler.reset();
        Ok(Some(outcome))
    }

    /// Draw once, tick until the game ends, then show the continue prompt.
    ///
    /// The prompt is skipped on [`GameEnd::Interrupted`].
    pub fn run<R: Renderer>(&mut self, state: &mut GameState, renderer: &mut R) -> Result<GameEnd> {
        renderer.render(state)?;

        let end = loop {
            if !self.running.is_running() {
                break GameEnd::Interrupted;
            }
            if let Some(outcome) = self.step(state, renderer)? {
                if outcome.is_terminal() {
                    break GameEnd::Finished(outcome);
                }
            }
            self.scheduler.idle();
        };

        info!("game ended: {:?}, final length {}", end, state.len());
        // An interrupted loop has no reader left to wait for a key.
        if let GameEnd::Finished(_) = end {
            renderer.show_prompt(CONTINUE_PROMPT)?;
        }
        Ok(end)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
