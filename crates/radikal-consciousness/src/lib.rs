//! Radikal Consciousness — toy models of consciousness as failure
//!
//! - bug: a counter that wakes up after failing more than three times
//! - void: silence, the full nothing, and a paradox of existence
//! - performance: identity as a coin flip between two lines
//! - radical: the thing that cannot be programmed
//! - ritual: the fixed demonstration sequence run by the `radikal` binary

pub mod bug;
pub mod config;
pub mod performance;
pub mod radical;
pub mod ritual;
pub mod void;

pub use bug::{AwarenessStatus, CounterState, ErrorCounter, SENTINEL, TRIGGER_THRESHOLD};
pub use performance::PerformanceConsciousness;
pub use radical::das_radikal_neue;
pub use void::VoidConsciousness;
