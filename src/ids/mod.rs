//! Identifier generation for echo handlers.
//!
//! # Design Decisions
//! - Handlers receive the generator through application state, never a global clock
//! - `ClockIds` keeps the millisecond-timestamp shape of ids but never hands
//!   out the same value twice, even when two requests land in the same millisecond
//! - `SequentialIds` gives tests fully predictable values

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of record identifiers for create handlers.
pub trait IdGenerator: Send + Sync + fmt::Debug {
    /// Produce the next identifier. Successive calls return strictly increasing values.
    fn next_id(&self) -> u64;
}

/// Milliseconds since the Unix epoch, bumped past the last issued id when the clock stalls.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: AtomicU64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&self) -> u64 {
        let now = Self::now_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(observed) => last = observed,
            }
        }
    }
}

/// Plain counter starting at a fixed value.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
