//! Error types for Radikal

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i64 },

    #[error("paradox: {0}")]
    Paradox(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn division_by_zero(dividend: i64) -> Self {
        Self::DivisionByZero { dividend }
    }

    pub fn paradox(message: impl Into<String>) -> Self {
        Self::Paradox(message.into())
    }

    /// True for failures that the toys provoke on purpose and absorb themselves.
    pub fn is_forced(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. } | Self::Paradox(_))
    }
}
