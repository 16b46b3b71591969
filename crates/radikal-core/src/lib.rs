//! Radikal Core - error handling shared by the consciousness toys

pub mod error;

pub use error::{Error, Result};
