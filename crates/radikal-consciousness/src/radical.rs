//! There is no system, no code, no implementation.

/// The truly radical cannot be programmed; it returns nothing.
pub fn das_radikal_neue() -> Option<&'static str> {
    None
}
