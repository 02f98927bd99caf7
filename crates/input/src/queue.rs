//! Shared state between the input reader and the game loop.
//!
//! Both handles are cheap to clone; every clone refers to the same underlying value.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::types::InputKey;

/// Unbounded FIFO of accepted keys.
///
/// The lock is held for exactly one push or one pop, never across a read or a tick.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    keys: Arc<Mutex<VecDeque<InputKey>>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, key: InputKey) {
        self.lock().push_back(key);
    }

    /// Pop the oldest key without blocking.
    pub fn try_pop(&self) -> Option<InputKey> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic on the other side cannot leave a VecDeque half-updated, so keep going.
    fn lock(&self) -> MutexGuard<'_, VecDeque<InputKey>> {
        self.keys.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Process-wide "game is running" flag.
#[derive(Debug, Clone)]
pub struct RunningFlag {
    running: Arc<AtomicBool>,
}

impl RunningFlag {
    /// A new flag starts out running.
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

impl Default for RunningFlag {
    fn default() -> Self {
        Self::new()
    }
}
