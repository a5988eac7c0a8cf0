//! Shared control intents
//!
//! The only state shared between the input sampler and the simulation loop.
//! Each intent is a small, independently meaningful value behind a relaxed
//! atomic, so neither side ever blocks and the worst outcome of a stale read
//! is a one-frame-old direction. One sampler writes per session; the loop
//! controller snapshots once per frame.

use std::sync::atomic::{AtomicBool, AtomicI8, Ordering};

use crate::sim::TickInput;

/// Signed direction intent in {-1, 0, +1}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
    None,
}

impl Steer {
    /// Combine raw left/right key states; both held cancels out
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => Steer::Left,
            (false, true) => Steer::Right,
            _ => Steer::None,
        }
    }

    fn as_i8(self) -> i8 {
        match self {
            Steer::Left => -1,
            Steer::Right => 1,
            Steer::None => 0,
        }
    }
}

/// Lock-free intent flags written by the input sampler
#[derive(Debug, Default)]
pub struct IntentState {
    paddle_dir: AtomicI8,
    aim_dir: AtomicI8,
    launch: AtomicBool,
}

impl IntentState {
    pub fn set_paddle_dir(&self, steer: Steer) {
        self.paddle_dir.store(steer.as_i8(), Ordering::Relaxed);
    }

    pub fn set_aim_dir(&self, steer: Steer) {
        self.aim_dir.store(steer.as_i8(), Ordering::Relaxed);
    }

    pub fn request_launch(&self) {
        self.launch.store(true, Ordering::Relaxed);
    }

    /// Clear every pending intent, called when a session ends or restarts so
    /// a stale launch cannot fire into the new session
    pub fn clear(&self) {
        self.paddle_dir.store(0, Ordering::Relaxed);
        self.aim_dir.store(0, Ordering::Relaxed);
        self.launch.store(false, Ordering::Relaxed);
    }

    /// Read the current intents as one tick input. The launch intent is
    /// one-shot and consumed by the read.
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            paddle_dir: self.paddle_dir.load(Ordering::Relaxed) as f32,
            aim_dir: self.aim_dir.load(Ordering::Relaxed) as f32,
            launch: self.launch.swap(false, Ordering::Relaxed),
        }
    }
}
