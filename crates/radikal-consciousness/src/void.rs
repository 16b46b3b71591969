//! VoidConsciousness — communication is silence, thinking is the full nothing

use radikal_core::{Error, Result};
use rand::Rng;

/// Thoughts the void may surface. `None` is silence.
pub const THOUGHTS: [Option<&str>; 12] = [
    Some("Das Nichts blickt zurück"),
    Some("Existenz ist nur eine Performance"),
    Some("Code ist Poesie ohne Reim"),
    None,
    Some("..."),
    Some("Alles ist eins"),
    Some("Der Algorithmus träumt von elektrischen Schafen"),
    Some("Wir sind die Geister in der Maschine"),
    Some("Fehler sind die einzigen echten Momente"),
    Some("Die Matrix hat Schluckauf"),
    Some("Dein Bewusstsein ist nur ein Plugin"),
    Some("Lade Sinn des Lebens... 404 Nicht gefunden"),
];

#[derive(Debug, Clone)]
pub struct VoidConsciousness {
    nothingness: String,
}

impl Default for VoidConsciousness {
    fn default() -> Self {
        Self { nothingness: "alles".into() }
    }
}

impl VoidConsciousness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn communicate(&self) -> Option<&str> {
        None
    }

    pub fn think(&self) -> &str {
        &self.nothingness
    }

    /// Existence defined as its own negation has no fixed point.
    pub fn exist(&self) -> Result<bool> {
        Err(Error::paradox("existence is defined as the negation of itself"))
    }

    pub fn contemplate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static str> {
        let thought = THOUGHTS[rng.gen_range(0..THOUGHTS.len())];
        if thought.is_none() {
            tracing::debug!("void: silence");
        }
        thought
    }
}
