//! Owned timer handles
//!
//! Every timer belongs to the session or screen that started it and is
//! advanced against that owner's virtual clock. Cancelling is just clearing
//! the due time, so dropping or resetting the owner can never leave a stray
//! callback behind.

use serde::{Deserialize, Serialize};

/// A repeating timer that fires every `period_ms` once started
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interval {
    period_ms: u64,
    next_due_ms: Option<u64>,
}

impl Interval {
    /// Create a stopped interval
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            next_due_ms: None,
        }
    }

    /// (Re)start so the first firing lands one period after `now_ms`
    pub fn start(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms + self.period_ms);
    }

    pub fn cancel(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Time of the next firing, if running
    pub fn due_at(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Consume one firing if it is due at or before `now_ms`.
    ///
    /// Only one firing is consumed per call; callers that jump far ahead
    /// loop until this returns false so every firing is observed.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.next_due_ms {
            Some(due) if due <= now_ms => {
                self.next_due_ms = Some(due + self.period_ms);
                true
            }
            _ => false,
        }
    }
}

/// A one-shot timer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Delay {
    due_ms: Option<u64>,
}

impl Delay {
    pub fn new() -> Self {
        Self { due_ms: None }
    }

    /// Schedule a firing `delay_ms` after `now_ms`, replacing any earlier one
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) {
        self.due_ms = Some(now_ms + delay_ms);
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn due_at(&self) -> Option<u64> {
        self.due_ms
    }

    /// Fire at most once; a fired delay is spent until rescheduled
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if due <= now_ms => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}
