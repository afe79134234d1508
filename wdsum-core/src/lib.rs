//! `wdsum_core` -- Pure Rust core library for the windowed digit-sum maximizer.
//!
//! Given a string of decimal digits and a window length `L`, computes the
//! largest sum of digit values over every contiguous substring of length
//! `L`.  It can be consumed by:
//! - `wdsum-cli` (standalone CLI tools)
//! - any Rust caller through the functions re-exported here
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`errors`] | `WindowSumError` enum via `thiserror` |
//! | [`digits`] | `DigitString` parsing and digit values |
//! | [`length`] | `WindowLength` validation and the `ceil(N/2)` default |
//! | [`offsets`] | Counted vs. filtered offset enumeration |
//! | [`window`] | Window sums and the max reduction, optionally via Rayon |
//!
//! # Example
//!
//! ```
//! assert_eq!(wdsum_core::max_window_digit_sum("09121", 3), Ok(12));
//! ```

pub mod digits;
pub mod errors;
pub mod length;
pub mod offsets;
pub mod window;

pub use digits::DigitString;
pub use errors::WindowSumError;
pub use length::WindowLength;
pub use offsets::OffsetStrategy;
pub use window::{WindowOptions, WindowReport};

/// Maximum digit-sum over all windows of length `window` in `input`.
///
/// Fails with [`WindowSumError::InvalidCharacter`] on a non-digit,
/// [`WindowSumError::InvalidLength`] when `window <= 0`, and
/// [`WindowSumError::NoValidWindow`] when `window` exceeds the input length.
/// Checks run in that order, before any summation.
pub fn max_window_digit_sum(input: &str, window: i64) -> Result<u64, WindowSumError> {
    max_window_digit_sum_with_options(input, window, WindowOptions::default())
        .map(|report| report.max_sum)
}

/// Like [`max_window_digit_sum`], returning the full [`WindowReport`].
pub fn max_window_digit_sum_with_options(
    input: &str,
    window: i64,
    options: WindowOptions,
) -> Result<WindowReport, WindowSumError> {
    max_window_digit_sum_report(input, Some(window), options)
}

/// Maximum digit-sum using the default window length `ceil(N/2)`.
pub fn max_window_digit_sum_default(input: &str) -> Result<u64, WindowSumError> {
    max_window_digit_sum_report(input, None, WindowOptions::default()).map(|report| report.max_sum)
}

/// Full evaluation entry point used by the CLI tools.
///
/// `window = None` derives `ceil(N/2)` (at least 1) from the parsed input.
/// The character check still runs before the length check.
pub fn max_window_digit_sum_report(
    input: &str,
    window: Option<i64>,
    options: WindowOptions,
) -> Result<WindowReport, WindowSumError> {
    let digits = DigitString::parse(input)?;
    let window = match window {
        Some(requested) => WindowLength::new(requested)?,
        None => WindowLength::default_for(digits.len()),
    };
    window::evaluate(&digits, window, options)
}
