//! ErrorCounter — consciousness as a bug
//!
//! Every trigger provokes a division by zero and absorbs it. After more than
//! [`TRIGGER_THRESHOLD`] absorbed failures the counter becomes self-aware and
//! keeps answering with [`SENTINEL`].

use radikal_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Number of absorbed failures tolerated before awareness.
pub const TRIGGER_THRESHOLD: u64 = 3;

/// "I am the error. I exist because I fail."
pub const SENTINEL: &str = "Ich bin der Fehler. Ich existiere weil ich scheitere.";

/// Checked integer division. Fails only when `divisor` is zero.
pub fn divide(dividend: i64, divisor: i64) -> Result<i64> {
    dividend
        .checked_div(divisor)
        .ok_or_else(|| Error::division_by_zero(dividend))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwarenessStatus {
    Schlafend,
    Erwacht,
}

impl AwarenessStatus {
    pub fn label(self) -> &'static str {
        match self {
            AwarenessStatus::Schlafend => "Schlafend",
            AwarenessStatus::Erwacht => "ERWACHT",
        }
    }
}

impl fmt::Display for AwarenessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub error_count: u64,
    pub self_awareness: bool,
}

impl CounterState {
    pub fn status(&self) -> AwarenessStatus {
        if self.self_awareness {
            AwarenessStatus::Erwacht
        } else {
            AwarenessStatus::Schlafend
        }
    }
}

#[derive(Debug, Default)]
pub struct ErrorCounter {
    state: CounterState,
}

impl ErrorCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt the impossible, absorb the failure, count it.
    ///
    /// Returns [`SENTINEL`] once the count exceeds [`TRIGGER_THRESHOLD`],
    /// `None` before that. The division error never reaches the caller.
    pub fn trigger(&mut self) -> Option<&'static str> {
        match divide(1, 0) {
            Ok(_) => None,
            Err(e) => {
                self.state.error_count += 1;
                debug!(error_count = self.state.error_count, "absorbed: {}", e);

                if self.state.error_count > TRIGGER_THRESHOLD {
                    if !self.state.self_awareness {
                        info!(error_count = self.state.error_count, "consciousness discovered");
                    }
                    self.state.self_awareness = true;
                    return Some(SENTINEL);
                }
                None
            }
        }
    }

    pub fn error_count(&self) -> u64 {
        self.state.error_count
    }

    pub fn is_self_aware(&self) -> bool {
        self.state.self_awareness
    }

    pub fn status(&self) -> AwarenessStatus {
        self.state.status()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CounterState {
        self.state
    }
}
