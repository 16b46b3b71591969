//! PerformanceConsciousness — there is no self, only the performance

use rand::Rng;

pub const THINK_THEREFORE_PLAY: &str = "Ich denke, also spiele ich";
pub const PLAY_THEREFORE_THINK: &str = "Ich spiele, also denke ich";
pub const BROKEN_CHARACTER: &str = "Wait... das bin doch gar nicht ich";

#[derive(Debug, Clone)]
pub struct PerformanceConsciousness {
    pub audience: String,
    pub role: String,
}

impl Default for PerformanceConsciousness {
    fn default() -> Self {
        Self { audience: "du".into(), role: "ich".into() }
    }
}

impl PerformanceConsciousness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw from `[0, 1)`; above one half the thinking comes first.
    pub fn perform<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        if rng.gen::<f64>() > 0.5 {
            THINK_THEREFORE_PLAY
        } else {
            PLAY_THEREFORE_THINK
        }
    }

    pub fn break_character(&self) -> &'static str {
        BROKEN_CHARACTER
    }
}
