//! Error types for pixconv
//!
//! Conversions themselves never fail. These errors come from the checked
//! constructors and the textual selector parsers.

use thiserror::Error;

/// Result type for pixconv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the fallible edges of the pixconv API
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A float component was non-finite or outside `[0, 1]`
    #[error("Channel {channel} out of range: {value} (expected a finite value in [0, 1])")]
    OutOfRange { channel: &'static str, value: f64 },

    /// Unrecognized depth name
    #[error("Unknown depth: {0}")]
    UnknownDepth(String),

    /// Unrecognized color model name
    #[error("Unknown color model: {0}")]
    UnknownModel(String),
}
