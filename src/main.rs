//! Terminal snake runner (default binary).
//!
//! Two threads: this one runs the fixed-tick game loop and draws, a background one blocks
//! on terminal reads and feeds arrow keys / Escape into a shared queue.

use std::fs::File;

use anyhow::{anyhow, Result};
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

use tui_snake::core::GameState;
use tui_snake::engine::{FixedIntervalScheduler, GameLoop};
use tui_snake::input::{InputQueue, InputReader, RunningFlag, TerminalEvents};
use tui_snake::term::{TerminalRenderer, TerminalScreen};
use tui_snake::types::GridSize;

const LOG_FILE_NAME: &str = "tui-snake.log";

fn main() -> Result<()> {
    init_logging();

    let (cols, rows) = TerminalRenderer::size()?;
    let grid = GridSize::from_terminal(cols, rows);
    info!("terminal {}x{}, grid {}x{}", cols, rows, grid.width, grid.height);

    let mut screen = TerminalScreen::default();
    screen.enter()?;

    let result = run(&mut screen, grid);

    // Always try to restore terminal state.
    if let Err(e) = screen.exit() {
        warn!("terminal teardown failed: {}", e);
    }
    result
}

fn run(screen: &mut TerminalScreen, grid: GridSize) -> Result<()> {
    let queue = InputQueue::new();
    let running = RunningFlag::new();

    let reader = InputReader::new(TerminalEvents, queue.clone(), running.clone()).spawn()?;

    let mut state = GameState::new(grid, rand::random());
    let mut game = GameLoop::new(queue, running, FixedIntervalScheduler::default());

    // On a drawing error the reader is left blocked on its read; process exit reclaims it.
    let end = game.run(&mut state, screen)?;
    info!("waiting for input reader after {:?}", end);

    reader
        .join()
        .map_err(|_| anyhow!("input reader thread panicked"))??;

    info!("exiting with snake length {}", state.len());
    Ok(())
}

/// Log to a file in the temp dir; the terminal itself belongs to the game.
fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    // Without a log file the game still runs, just silently.
    if let Ok(file) = File::create(&path) {
        // Fails only if a logger is already installed; keep that one.
        WriteLogger::init(LevelFilter::Info, Config::default(), file).ok();
    }
}
