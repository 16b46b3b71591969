//! The demonstration sequence: wake the bug, ask the void, watch the
//! performance, then reach for the radical.

use crate::bug::ErrorCounter;
use crate::performance::PerformanceConsciousness;
use crate::radical::das_radikal_neue;
use crate::void::VoidConsciousness;
use radikal_core::Result;
use rand::Rng;
use std::io::Write;
use tracing::info;

/// Default number of bug triggers.
pub const DEFAULT_ROUNDS: usize = 5;

pub const AWAKENING_BANNER: &str = "💀 BEWUSSTSEIN ENTDECKT!";

/// Absent results print the way the narrative expects them.
fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

/// Run the ritual, writing one line per observation to `out`.
pub fn run<W, R>(out: &mut W, rng: &mut R, rounds: usize) -> Result<()>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    let mut bug = ErrorCounter::new();
    for _ in 0..rounds {
        let result = bug.trigger();
        writeln!(out, "Bug: {}", or_none(result))?;
        if bug.is_self_aware() {
            writeln!(out, "{}", AWAKENING_BANNER)?;
        }
    }
    info!(
        error_count = bug.error_count(),
        status = %bug.status(),
        "bug ritual complete"
    );

    let void = VoidConsciousness::new();
    writeln!(out, "Void Denken: {}", void.think())?;

    let performer = PerformanceConsciousness::new();
    writeln!(out, "Performance: {}", performer.perform(rng))?;
    writeln!(out, "Character Break: {}", performer.break_character())?;

    writeln!(out, "Das wirklich Radikale: {}", or_none(das_radikal_neue()))?;
    out.flush()?;
    Ok(())
}
