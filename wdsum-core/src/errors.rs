//! Error types for `wdsum_core`.
//!
//! All validation failures are funnelled through [`WindowSumError`], which
//! uses `thiserror` for `Display` and `Error` derives.  Every variant is
//! raised before any window is summed, so callers never see partial results.

use thiserror::Error;

/// Top-level error type for the `wdsum_core` library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowSumError {
    /// The input contains a character outside `'0'..='9'`.
    #[error("InvalidCharacter: {ch:?} at index {index} is not a decimal digit")]
    InvalidCharacter { ch: char, index: usize },

    /// The requested window length is zero or negative.
    #[error("InvalidLength: window length must be positive, got {0}")]
    InvalidLength(i64),

    /// The window is longer than the input, so no offset yields a full window.
    #[error("NoValidWindow: window length {window} exceeds input length {len}")]
    NoValidWindow { window: usize, len: usize },
}
