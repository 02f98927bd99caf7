//! Background input reader.
//!
//! Terminal reads block, the game tick must not. The reader owns the blocking side: one
//! read per iteration, accepted keys go onto the [`InputQueue`], and the [`RunningFlag`] is
//! checked again before the next read. Shutdown therefore waits for one more event.

use std::io;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{debug, error};

use crate::map::accept_event;
use crate::queue::{InputQueue, RunningFlag};

/// A blocking source of terminal events.
pub trait EventSource: Send + 'static {
    fn read_event(&mut self) -> io::Result<Event>;
}

/// Reads from the real terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn read_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

pub struct InputReader<S> {
    source: S,
    queue: InputQueue,
    running: RunningFlag,
}

impl<S: EventSource> InputReader<S> {
    pub fn new(source: S, queue: InputQueue, running: RunningFlag) -> Self {
        Self {
            source,
            queue,
            running,
        }
    }

    /// Read until the running flag is cleared.
    ///
    /// A read error stops the game as well, so the loop does not keep ticking without input.
    pub fn run(mut self) -> Result<()> {
        while self.running.is_running() {
            let event = match self.source.read_event() {
                Ok(ev) => ev,
                Err(e) => {
                    error!("input reader: read failed: {}", e);
                    self.running.stop();
                    return Err(e).context("failed to read terminal input");
                }
            };

            if let Some(key) = accept_event(&event) {
                debug!("input reader: accepted {:?}", key);
                self.queue.push(key);
            }

            thread::yield_now();
        }

        debug!("input reader: stopped");
        Ok(())
    }

    /// Run on a dedicated, named thread.
    pub fn spawn(self) -> Result<JoinHandle<Result<()>>> {
        thread::Builder::new()
            .name("input-reader".to_string())
            .spawn(move || self.run())
            .context("failed to spawn input reader thread")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InputKey;
    use crossterm::event::{KeyCode, KeyEvent};
    use std::collections::VecDeque;

    /// Replays a fixed script, then clears the flag and reports a focus event.
    struct Script {
        events: VecDeque<io::Result<Event>>,
        running: RunningFlag,
    }

    impl EventSource for Script {
        fn read_event(&mut self) -> io::Result<Event> {
            match self.events.pop_front() {
                Some(ev) => ev,
                None => {
                    self.running.stop();
                    Ok(Event::FocusGained)
                }
            }
        }
    }

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::from(code)))
    }

    #[test]
    fn test_forwards_accepted_keys_in_order() {
        let queue = InputQueue::new();
        let running = RunningFlag::new();
        let source = Script {
            events: VecDeque::from(vec![
                key(KeyCode::Left),
                key(KeyCode::Char('x')),
                key(KeyCode::Up),
                Ok(Event::Resize(10, 10)),
                key(KeyCode::Esc),
            ]),
            running: running.clone(),
        };

        InputReader::new(source, queue.clone(), running.clone())
            .run()
            .unwrap();

        assert_eq!(queue.try_pop(), Some(InputKey::Left));
        assert_eq!(queue.try_pop(), Some(InputKey::Up));
        assert_eq!(queue.try_pop(), Some(InputKey::Quit));
        assert_eq!(queue.try_pop(), None);
    }

    #[test]
    fn test_does_not_read_once_stopped() {
        let queue = InputQueue::new();
        let running = RunningFlag::new();
        running.stop();
        let source = Script {
            events: VecDeque::from(vec![key(KeyCode::Up)]),
            running: running.clone(),
        };

        InputReader::new(source, queue.clone(), running).run().unwrap();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_read_error_stops_the_game() {
        let queue = InputQueue::new();
        let running = RunningFlag::new();
        let source = Script {
            events: VecDeque::from(vec![
                key(KeyCode::Down),
                Err(io::Error::new(io::ErrorKind::Other, "tty gone")),
                key(KeyCode::Up),
            ]),
            running: running.clone(),
        };

        let err = InputReader::new(source, queue.clone(), running.clone())
            .run()
            .unwrap_err();

        assert!(!running.is_running());
        assert!(format!("{:#}", err).contains("tty gone"));
        assert_eq!(queue.try_pop(), Some(InputKey::Down));
        assert_eq!(queue.try_pop(), None);
    }

    #[test]
    fn test_spawned_reader_joins_after_flag_clears() {
        let queue = InputQueue::new();
        let running = RunningFlag::new();
        let source = Script {
            events: VecDeque::from(vec![key(KeyCode::Right)]),
            running: running.clone(),
        };

        let handle = InputReader::new(source, queue.clone(), running.clone())
            .spawn()
            .unwrap();
        handle.join().unwrap().unwrap();

        assert!(!running.is_running());
        assert_eq!(queue.try_pop(), Some(InputKey::Right));
    }
}
